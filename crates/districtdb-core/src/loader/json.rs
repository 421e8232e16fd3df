// crates/districtdb-core/src/loader/json.rs

// ---------------------------------------------------------------------------
// FILE GUARD: This entire file is skipped if 'json' feature is missing.
// ---------------------------------------------------------------------------
#![cfg(feature = "json")]

use super::open_stream;
use crate::error::{DistrictError, Result};
use crate::tree::DistrictDb;
use std::io::Read;
use std::path::Path;

impl DistrictDb {
    /// Parse a JSON dataset file: the flat path list (source form) or the
    /// compressed tree object (persisted form), `.gz` accepted under the
    /// `compact` feature.
    pub fn load_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let reader = open_stream(path.as_ref())?;
        Self::from_json_reader(reader)
    }

    /// Parse a JSON dataset from any reader.
    pub fn from_json_reader(reader: impl Read) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_reader(reader).map_err(DistrictError::Json)?;
        Self::from_json_value(&value)
    }
}
