//! Error types for the player

use thiserror::Error;

/// Player errors
///
/// Store mutations never fail; these cover the media element and
/// configuration edges.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// No episode is currently loaded
    #[error("No episode loaded")]
    NoEpisodeLoaded,

    /// Invalid seek position
    #[error("Invalid seek position: {0}")]
    InvalidSeekPosition(f64),

    /// Media element refused a command
    #[error("Media element error: {0}")]
    Media(String),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for PlaybackError {
    fn from(err: config::ConfigError) -> Self {
        PlaybackError::Config(err.to_string())
    }
}

/// Result type for player operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
