//! Error types for the binkit-hashing crate

use thiserror::Error;

/// Result type for hashing operations
pub type Result<T> = std::result::Result<T, HashError>;

/// Errors from selecting a hash algorithm
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HashError {
    /// The name does not match any supported algorithm
    #[error("unknown hash algorithm {0:?}")]
    UnknownAlgorithm(String),
}

impl HashError {
    pub(crate) fn unknown_algorithm(name: impl Into<String>) -> Self {
        Self::UnknownAlgorithm(name.into())
    }
}
