// crates/districtdb-core/src/loader/builder.rs
#![cfg(feature = "builder")]

//! Dataset compiler: turns the flat district list into the compressed tree
//! and manages the binary cache written next to JSON datasets.

use super::{get_cache_path, CACHE_SUFFIX};
use crate::error::{DistrictError, Result};
use crate::tree::DistrictDb;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{write::GzEncoder, Compression};

// -----------------------------------------------------------------------------
// CONFIGURATION
// -----------------------------------------------------------------------------

/// Output encoding of a built dataset.
#[derive(Debug, Clone, Copy)]
pub enum TargetFormat {
    /// The compressed tree as minified JSON (the interchange form).
    Json,
    /// The bincode cache form (fastest to load).
    Binary,
}

#[derive(Debug, Clone, Copy)]
pub enum CompressionMode {
    Gzip,
    None,
}

// -----------------------------------------------------------------------------
// BUILDER (The Factory)
// -----------------------------------------------------------------------------

/// Compile `source_path` (flat path list or an existing tree, JSON) into
/// `out_path` in the requested format.
pub fn build_database(
    source_path: &Path,
    out_path: &Path,
    format: TargetFormat,
    compression: CompressionMode,
) -> Result<()> {
    let db = DistrictDb::load_json_file(source_path)?;

    match format {
        TargetFormat::Json => {
            let mut writer = make_writer(out_path, compression)?;
            // Minified on purpose: the tree form exists to be small.
            serde_json::to_writer(&mut writer, &db.to_json_value())
                .map_err(DistrictError::Json)?;
            writer.flush().map_err(DistrictError::Io)?;
        }
        TargetFormat::Binary => write_binary(out_path, &db, compression)?,
    }

    Ok(())
}

// -----------------------------------------------------------------------------
// RUNTIME HELPER (Smart Load)
// -----------------------------------------------------------------------------

impl DistrictDb {
    /// **Smart Load:** use the binary cache when fresh, otherwise parse the
    /// JSON and (best-effort) rebuild the cache next to it.
    pub(super) fn load_via_builder(path: &Path) -> Result<Self> {
        let cache_path = get_cache_path(path, CACHE_SUFFIX);

        if is_cache_fresh(path, &cache_path) {
            if let Ok(db) = Self::load_binary_file(&cache_path) {
                return Ok(db);
            }
        }

        let db = Self::load_json_file(path)?;

        #[cfg(feature = "compact")]
        let comp = CompressionMode::Gzip;
        #[cfg(not(feature = "compact"))]
        let comp = CompressionMode::None;

        write_binary(&cache_path, &db, comp).ok();

        Ok(db)
    }
}

fn is_cache_fresh(json_path: &Path, cache_path: &Path) -> bool {
    let cache_time = match fs::metadata(cache_path).and_then(|m| m.modified()) {
        Ok(time) => time,
        Err(_) => return false,
    };
    match fs::metadata(json_path).and_then(|m| m.modified()) {
        Ok(json_time) => json_time <= cache_time,
        // Source missing or unreadable: keep serving the cache.
        Err(_) => true,
    }
}

// -----------------------------------------------------------------------------
// WRITERS
// -----------------------------------------------------------------------------

fn write_binary(path: &Path, db: &DistrictDb, compression: CompressionMode) -> Result<()> {
    let mut writer = make_writer(path, compression)?;
    bincode::serialize_into(&mut writer, db).map_err(DistrictError::Bincode)?;
    writer.flush().map_err(DistrictError::Io)
}

fn make_writer(path: &Path, compression: CompressionMode) -> Result<Box<dyn Write>> {
    let file = File::create(path).map_err(DistrictError::Io)?;
    let writer = BufWriter::new(file);

    match compression {
        CompressionMode::Gzip => {
            #[cfg(feature = "compact")]
            {
                Ok(Box::new(GzEncoder::new(writer, Compression::default())))
            }
            #[cfg(not(feature = "compact"))]
            {
                Err(DistrictError::InvalidData(
                    "Gzip requested but 'compact' disabled".into(),
                ))
            }
        }
        CompressionMode::None => Ok(Box::new(writer)),
    }
}
