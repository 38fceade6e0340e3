//! # Catalog Errors
//!
//! Error types for catalog loading.
//!
//! Every variant is a load-failure condition: when parsing fails, no
//! partial catalog is ever installed. A lookup miss on a loaded catalog
//! is not an error at all; accessors return `None` for that.

use thiserror::Error;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog load errors
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// Raw document is not valid JSON
    #[error("Catalog document is not valid JSON: {reason}")]
    Parse {
        /// Underlying parse failure
        reason: String,
    },

    /// Document parsed but does not have the expected shape
    #[error("Catalog field '{field}' is malformed: {reason}")]
    Shape {
        /// Field or path that violated the expected shape
        field: String,
        /// What was expected
        reason: String,
    },

    /// Two records in the same list share a key
    #[error("Duplicate {kind} key '{key}' in catalog")]
    DuplicateKey {
        /// "clue" or "suspect"
        kind: &'static str,
        /// The repeated key
        key: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_the_field() {
        let err = CatalogError::Shape {
            field: "clues[2].key".to_string(),
            reason: "expected a non-empty string".to_string(),
        };
        let text = format!("{}", err);
        assert!(text.contains("clues[2].key"));
        assert!(text.contains("non-empty string"));
    }

    #[test]
    fn test_duplicate_key_display() {
        let err = CatalogError::DuplicateKey {
            kind: "clue",
            key: "emf5".to_string(),
        };
        assert_eq!(format!("{}", err), "Duplicate clue key 'emf5' in catalog");
    }
}
