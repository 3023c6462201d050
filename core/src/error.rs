//! Error types and handling for pollview core

use thiserror::Error;

/// Result type alias for pollview operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for pollview core
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Poll fetch errors
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Invalid poll identifier
    #[error("Invalid poll id: {0}")]
    InvalidPollId(String),

    /// HTTP client construction errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Configuration-specific errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid value for field '{field}': {value}")]
    InvalidValue { field: String, value: String },
}

/// Errors raised while fetching a single poll.
///
/// The display text of each variant is what the poll detail view shows,
/// so every variant names the poll it was fetching.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never completed (connection refused, DNS, timeout)
    #[error("Network error while fetching poll with ID {poll_id}")]
    Transport { poll_id: String, message: String },

    /// The service answered with a non-2xx status
    #[error("Failed to fetch poll with ID {poll_id}")]
    Status { poll_id: String, status: u16 },

    /// The body was not a poll record
    #[error("Unreadable poll payload for ID {poll_id}: {message}")]
    Decode { poll_id: String, message: String },
}

impl FetchError {
    /// Poll identifier the failed request was issued for
    pub fn poll_id(&self) -> &str {
        match self {
            FetchError::Transport { poll_id, .. }
            | FetchError::Status { poll_id, .. }
            | FetchError::Decode { poll_id, .. } => poll_id,
        }
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Generic(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Generic(msg.to_string())
    }
}
