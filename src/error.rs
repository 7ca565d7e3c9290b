//! Error types for the cache
//!
//! Provides unified error handling using thiserror. A cache miss is never an
//! error: absence is reported as `Ok(None)` or `Ok(false)`.

use thiserror::Error;

/// Boxed error used at the serializer and factory seams.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

// == Cache Error Enum ==
/// Unified error type for cache operations.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The serializer could not encode or decode a value
    #[error("Serialization error: {0}")]
    Serialization(#[source] BoxError),

    /// An out-of-process backend failed to reach its storage medium
    #[error("Transport error: {0}")]
    Transport(#[source] BoxError),

    /// The factory passed to `get_or_create` failed
    #[error("Factory error: {0}")]
    Factory(#[source] BoxError),

    /// The entry written by `get_or_create` was gone before it could be read back
    #[error("Entry vanished before read-back: {0}")]
    Vanished(String),
}

impl CacheError {
    /// Wraps any error as a serialization failure.
    pub fn serialization(err: impl Into<BoxError>) -> Self {
        CacheError::Serialization(err.into())
    }

    /// Wraps any error as a transport failure.
    pub fn transport(err: impl Into<BoxError>) -> Self {
        CacheError::Transport(err.into())
    }
}

impl From<serde_json::Error> for CacheError {
    fn from(err: serde_json::Error) -> Self {
        CacheError::Serialization(Box::new(err))
    }
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
