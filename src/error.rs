//! Error types for sortedslice
//!
//! Only persistence can fail. Keyed mutations on the map are infallible and
//! absence of a key is reported through `Option`, never through this type.

use thiserror::Error;

/// Result type alias using SortedError
pub type Result<T> = std::result::Result<T, SortedError>;

/// Unified error type for snapshot operations
#[derive(Debug, Error)]
pub enum SortedError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Snapshot Format Errors
    // -------------------------------------------------------------------------
    #[error("Snapshot corruption detected: {0}")]
    Corruption(String),

    #[error("Snapshot entries out of order at index {index}")]
    Unordered { index: usize },
}

impl From<bincode::Error> for SortedError {
    fn from(err: bincode::Error) -> Self {
        match *err {
            bincode::ErrorKind::Io(io) => SortedError::Io(io),
            other => SortedError::Serialization(other.to_string()),
        }
    }
}
