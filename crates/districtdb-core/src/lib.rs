// crates/districtdb-core/src/lib.rs

//! districtdb-core — compact hierarchical store and jamo-aware search for
//! Korean administrative districts (시/도 → 시/군/구 → 읍/면/동).
//!
//! The district list is stored as a compressed tree (`DistrictDb`), expanded
//! on demand into full path strings, and queried with Hangul-decomposed
//! substring matching so that in-progress IME input such as `강ㄴ` already
//! matches `강남구`.

pub mod common;
pub mod error;
pub mod hangul; // Jamo decomposition (query and candidates, symmetrically)
pub mod loader; // The public loader
pub mod model;
pub mod search; // DistrictSearch impl
pub mod traits;
pub mod tree;

// Re-exports
pub use crate::common::DbStats;
pub use crate::error::{DistrictError, Result};
pub use crate::model::PlaceRecord;
pub use crate::search::RESULT_LIMIT;
pub use crate::traits::{DistrictSearch, NameMatch};
pub use crate::tree::{DistrictDb, RegionNode, PATH_SEPARATOR};

#[cfg(feature = "builder")]
pub use crate::loader::{build_database, CompressionMode, TargetFormat};
