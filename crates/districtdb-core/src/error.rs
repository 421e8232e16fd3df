// crates/districtdb-core/src/error.rs

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, DistrictError>;

/// Errors surfaced by the dataset loaders and builders.
///
/// Search itself is infallible: a query that matches nothing returns an
/// empty list, and corrupt inner tree nodes degrade to empty subtrees
/// instead of erroring.
#[derive(Debug, Error)]
pub enum DistrictError {
    #[error("dataset not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary decode error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("invalid dataset: {0}")]
    InvalidData(String),
}
