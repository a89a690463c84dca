//! Dashboard host error types

use thiserror::Error;

/// Errors that stop the static host from starting or running
#[derive(Error, Debug)]
pub enum ServerError {
    /// Binding or serving failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// The bundle directory does not exist
    #[error("Static directory not found: {0}")]
    MissingStaticDir(String),
}

/// Result type for host operations
pub type ServerResult<T> = Result<T, ServerError>;
