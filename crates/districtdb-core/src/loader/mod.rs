// crates/districtdb-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, Decompression) and delegates to
//! specific parsers (Binary vs JSON). The tree is loaded once per process
//! and shared read-only by every search call.

use crate::error::{DistrictError, Result};
use crate::tree::DistrictDb;
use bincode::Options;
use once_cell::sync::OnceCell;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

#[cfg(feature = "builder")]
mod builder;
#[cfg(feature = "json")]
mod json;

#[cfg(feature = "builder")]
pub use builder::{build_database, CompressionMode, TargetFormat};

static DISTRICT_DB_CACHE: OnceCell<DistrictDb> = OnceCell::new();

/// Hard ceiling on decoded binary size, against data bombs.
const BINCODE_SIZE_LIMIT: u64 = 64 * 1024 * 1024;

/// Suffix appended to a JSON dataset's filename for its binary cache.
#[cfg(feature = "compact")]
pub const CACHE_SUFFIX: &str = "tree.bin.gz";
#[cfg(not(feature = "compact"))]
pub const CACHE_SUFFIX: &str = "tree.bin";

impl DistrictDb {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "korea_districts_tree.json"
    }

    /// Process-wide database, loaded once from the bundled dataset and
    /// shared by every caller. Reconstruct (restart) rather than patch if
    /// the dataset changes.
    pub fn load() -> Result<&'static Self> {
        DISTRICT_DB_CACHE.get_or_try_init(|| {
            let dir = Self::default_data_dir();
            let file = Self::default_dataset_filename();
            Self::load_from_path(dir.join(file))
        })
    }

    /// Load a dataset from an explicit path.
    ///
    /// `.bin` (and `.bin.gz`) files decode as the binary cache format;
    /// anything else parses as JSON — either the flat path list or the
    /// compressed tree object. A `.gz` extension adds gzip on the way in.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if is_binary_name(path) {
            return Self::load_binary_file(path);
        }

        #[cfg(feature = "builder")]
        {
            Self::load_via_builder(path)
        }
        #[cfg(not(feature = "builder"))]
        {
            Self::load_json_file(path)
        }
    }

    /// Decode the binary cache format.
    pub fn load_binary_file(path: &Path) -> Result<Self> {
        let mut reader = open_stream(path)?;
        let mut data = Vec::new();
        reader.read_to_end(&mut data).map_err(DistrictError::Io)?;
        Self::from_bytes(&data)
    }

    /// Reconstruct the database from serialized bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        bincode::DefaultOptions::new()
            .with_limit(BINCODE_SIZE_LIMIT)
            .allow_trailing_bytes()
            .deserialize(data)
            .map_err(DistrictError::Bincode)
    }

    #[cfg(not(any(feature = "json", feature = "builder")))]
    fn load_json_file(path: &Path) -> Result<Self> {
        Err(DistrictError::InvalidData(format!(
            "cannot parse {}: JSON loading requires the 'json' feature",
            path.display()
        )))
    }
}

/// True for `.bin` payloads, gzipped or not.
fn is_binary_name(path: &Path) -> bool {
    match path.file_name().and_then(|name| name.to_str()) {
        Some(name) => name.ends_with(".bin") || name.ends_with(".bin.gz"),
        None => false,
    }
}

/// Opens a file, buffers it, and wraps it in a gzip decoder when the name
/// asks for one. Returns a generic reader so callers don't care about the
/// compression.
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        DistrictError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if path.extension().and_then(|ext| ext.to_str()) == Some("gz") {
        #[cfg(feature = "compact")]
        {
            return Ok(Box::new(flate2::read::GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(DistrictError::InvalidData(format!(
                "{} is gzipped but the 'compact' feature is disabled",
                path.display()
            )));
        }
    }

    Ok(Box::new(reader))
}

/// Cache file path for a JSON dataset: the dataset name plus [`CACHE_SUFFIX`].
#[cfg(feature = "builder")]
fn get_cache_path(json_path: &Path, suffix: &str) -> PathBuf {
    let filename = json_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    json_path.with_file_name(format!("{filename}.{suffix}"))
}
