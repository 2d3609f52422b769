//! Error types for the projection engine

use thiserror::Error;

/// Result type alias for projection operations
pub type Result<T> = std::result::Result<T, ProjectionError>;

/// Errors that can occur while building weekly projections
#[derive(Error, Debug)]
pub enum ProjectionError {
    /// No player matched the given name fragment
    #[error("No players found for '{query}'")]
    PlayerNotFound { query: String },

    /// Week option outside current/next
    #[error("Invalid week option '{0}': expected 1 (current) or 2 (next)")]
    InvalidOption(String),

    /// Schedule entry with a date that is not "MM/DD/YYYY HH:MM:SS"
    #[error("Malformed schedule date '{date}': {source}")]
    ScheduleFormat {
        date: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failure reported by a data provider, passed through unchanged
    #[error(transparent)]
    Provider(#[from] anyhow::Error),
}

impl ProjectionError {
    /// Create a new player-not-found error
    pub fn player_not_found(query: impl Into<String>) -> Self {
        Self::PlayerNotFound { query: query.into() }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
