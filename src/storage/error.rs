//! Key-value storage error types

use thiserror::Error;

/// Errors raised by a key-value backend
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    /// The backend could not be reached (e.g. storage disabled by the browser)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Reading a key failed
    #[error("Failed to read {key}: {reason}")]
    Read { key: String, reason: String },

    /// Writing a key failed (quota exceeded, private mode, ...)
    #[error("Failed to write {key}: {reason}")]
    Write { key: String, reason: String },
}

/// Result type alias for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
