//! Session configuration
//!
//! Where the catalog lives, which locale falls back last, and the fixed
//! user-facing strings. Loadable from a JSON file; individual fields are
//! overridable by CLI flags. Every field has a default, so an absent file
//! section never fails.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fetch::DEFAULT_CATALOG_URL;
use crate::locale::DEFAULT_LOCALE;

/// Configuration file or parse failure
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("Config file read failed: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a valid config document
    #[error("Config file is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One session's configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Catalog document location: an http(s) URL or a local path
    pub catalog_url: String,

    /// Final fallback locale for localized text
    pub default_locale: String,

    /// Explicit locale override; exactly zero or one is active at a time
    pub locale_override: Option<String>,

    /// Detail panel placeholder shown when no suspect is selected
    pub detail_placeholder: String,

    /// Message shown when no suspect is consistent with the selection
    pub no_match_message: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            default_locale: DEFAULT_LOCALE.to_string(),
            locale_override: None,
            detail_placeholder: "(select a suspect for details)".to_string(),
            no_match_message: "No suspect is consistent with this combination of clues."
                .to_string(),
        }
    }
}

impl SessionConfig {
    /// Load from a JSON file; absent fields keep their defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.catalog_url, "data/catalog.json");
        assert_eq!(config.default_locale, "en");
        assert!(config.locale_override.is_none());
        assert!(!config.no_match_message.is_empty());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{\"catalog_url\": \"https://example.test/c.json\"}}").unwrap();

        let config = SessionConfig::from_file(file.path()).unwrap();
        assert_eq!(config.catalog_url, "https://example.test/c.json");
        assert_eq!(config.default_locale, "en");
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let result = SessionConfig::from_file(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = SessionConfig::from_file("/nonexistent/cluedex.json");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
