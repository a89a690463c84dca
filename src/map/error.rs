//! Map engine error types

use thiserror::Error;

/// Message shown to the user whenever the map cannot be brought up.
/// Engine details go to the log, never to the page.
pub const MAP_LOAD_ERROR: &str =
    "Failed to initialize the map. Please check your Mapbox access token and try again.";

/// Errors surfaced by a [`MapEngine`](super::MapEngine) implementation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MapError {
    /// The provider refused the access token
    #[error("Access token rejected: {0}")]
    InvalidToken(String),

    /// The container surface is gone or was never mounted
    #[error("Map container not available")]
    MissingContainer,

    /// Any other failure reported by the engine
    #[error("Map engine error: {0}")]
    Engine(String),

    /// Source or layer data could not be encoded for the engine
    #[error("Failed to encode map data: {0}")]
    Encoding(String),
}

impl From<serde_json::Error> for MapError {
    fn from(err: serde_json::Error) -> Self {
        MapError::Encoding(err.to_string())
    }
}

/// Result type alias for map engine operations
pub type MapResult<T> = Result<T, MapError>;
