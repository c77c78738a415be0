//! Client error types.

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for client calls.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors surfaced by [`crate::NotesClient`].
///
/// Nothing is retried or recovered; every failure reaches the caller.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Connection, timeout or other transport failure.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Status { status: StatusCode, message: String },

    /// A success response whose body is not the expected JSON.
    #[error("Invalid response body: {0}")]
    Decode(String),

    /// Invalid client configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// HTTP status for `Status` errors.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Transport(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    pub fn is_bad_request(&self) -> bool {
        self.status() == Some(StatusCode::BAD_REQUEST)
    }
}
