//! # Fetch Errors
//!
//! Retrieval failures carry a transport status code and message. They are
//! surfaced as a load-failure condition, never retried automatically, and
//! never install a partial catalog.

use thiserror::Error;

/// Result type for catalog retrieval
pub type FetchResult<T> = Result<T, FetchError>;

/// Catalog retrieval errors
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a non-success status
    #[error("Catalog fetch failed: HTTP {status} {status_text}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Status text reported by the server
        status_text: String,
    },

    /// The request never produced a status (DNS, connect, TLS)
    #[error("Catalog fetch failed: {0}")]
    Transport(String),

    /// A local catalog file could not be read
    #[error("Catalog file read failed: {0}")]
    Io(#[from] std::io::Error),
}

impl FetchError {
    /// The transport status code, 0 when the request never got one
    pub fn status(&self) -> u16 {
        match self {
            FetchError::Status { status, .. } => *status,
            FetchError::Transport(_) | FetchError::Io(_) => 0,
        }
    }
}
