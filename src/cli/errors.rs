//! CLI-specific error types
//!
//! Every CLI error ends the process with a non-zero exit code. A no-match
//! outcome is not an error and exits zero.

use std::fmt;
use std::io;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::controller::SessionError;
use crate::fetch::FetchError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdin/stdout, runtime)
    IoError,
    /// Catalog could not be loaded
    LoadFailed,
    /// Catalog document failed strict validation
    InvalidCatalog,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "CLUEDEX_CLI_CONFIG_ERROR",
            Self::IoError => "CLUEDEX_CLI_IO_ERROR",
            Self::LoadFailed => "CLUEDEX_CLI_LOAD_FAILED",
            Self::InvalidCatalog => "CLUEDEX_CLI_INVALID_CATALOG",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Catalog load failure
    pub fn load_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::LoadFailed, msg)
    }

    /// Strict validation failure
    pub fn invalid_catalog(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::InvalidCatalog, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::config_error(e.to_string())
    }
}

impl From<SessionError> for CliError {
    fn from(e: SessionError) -> Self {
        Self::load_failed(e.to_string())
    }
}

impl From<FetchError> for CliError {
    fn from(e: FetchError) -> Self {
        Self::load_failed(e.to_string())
    }
}

impl From<CatalogError> for CliError {
    fn from(e: CatalogError) -> Self {
        Self::invalid_catalog(e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code_and_message() {
        let err = CliError::load_failed("boom");
        assert_eq!(format!("{}", err), "CLUEDEX_CLI_LOAD_FAILED: boom");
    }

    #[test]
    fn test_from_session_error() {
        let err = CliError::from(SessionError::from(FetchError::Transport(
            "connection refused".to_string(),
        )));
        assert_eq!(err.code(), &CliErrorCode::LoadFailed);
    }
}
