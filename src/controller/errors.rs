//! # Session Errors
//!
//! A load failure is the only error the controller surfaces: retrieval
//! and parse failures both leave the previous state in place and install
//! nothing. A no-match outcome is a view phase, not an error; a lookup
//! miss is a logged no-op.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::fetch::FetchError;

/// Result type for controller operations
pub type SessionResult<T> = Result<T, SessionError>;

/// Controller errors
#[derive(Debug, Error)]
pub enum SessionError {
    /// Catalog retrieval failed
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Catalog document was malformed
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display_passes_through() {
        let err = SessionError::from(FetchError::Status {
            status: 500,
            status_text: "Internal Server Error".to_string(),
        });
        assert_eq!(
            format!("{}", err),
            "Catalog fetch failed: HTTP 500 Internal Server Error"
        );
    }
}
