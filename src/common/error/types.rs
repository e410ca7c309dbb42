//! Crate-wide error type.
//!
//! The compilation, parsing and serialization paths never produce errors:
//! malformed input degrades to text or to literal markup. This type is used
//! by the opt-in strict validators, note JSON encoding and option loading.
use thiserror::Error;

/// Main error type for mathwriter operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Note or element JSON could not be encoded or decoded
    #[error("JSON error: {0}")]
    Json(String),

    /// Render options could not be read
    #[error("Configuration error: {0}")]
    Config(String),

    /// A matrix grid does not match its declared dimensions
    #[error("Matrix shape mismatch: expected {expected_rows}x{expected_cols}, {detail}")]
    ShapeMismatch {
        expected_rows: usize,
        expected_cols: usize,
        detail: String,
    },

    /// A matrix with zero rows or zero columns
    #[error("Matrix has no cells")]
    EmptyMatrix,

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type for mathwriter operations.
pub type Result<T> = std::result::Result<T, Error>;
