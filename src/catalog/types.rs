//! Catalog record types
//!
//! A catalog is an immutable-per-load collection:
//! - an opaque version label
//! - an ordered list of clues (document order = display order)
//! - an ordered list of suspects (document order = display order)
//!
//! The catalog is replaced wholesale on reload, never partially mutated.
//! All read accessors return independent copies so callers cannot mutate
//! canonical state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Locale-suffixed text fields of one record, keyed by full field name
/// (`name_en`, `details_fr`), in stable field-name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    fields: BTreeMap<String, String>,
}

impl LocalizedText {
    /// Create an empty field set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a localized field value under its full field name
    pub fn insert(&mut self, field_name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field_name.into(), value.into());
    }

    /// Look up a value by full field name (`name_fr`), `None` when absent
    pub fn get(&self, field_name: &str) -> Option<&str> {
        self.fields.get(field_name).map(String::as_str)
    }

    /// True when the record carries no localized fields at all
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate (field name, value) pairs in field-name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LocalizedText {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A discoverable attribute a suspect may or may not exhibit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    /// Unique, stable key
    pub key: String,
    /// Localized `name_*` fields
    pub text: LocalizedText,
}

/// A catalog entity the user is trying to identify by elimination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suspect {
    /// Unique, stable key
    pub key: String,
    /// Localized `name_*` and `details_*` fields
    pub text: LocalizedText,
    /// Keys of the clues this suspect exhibits, in document order
    pub clues: Vec<String>,
}

impl Suspect {
    /// True when this suspect exhibits the given clue
    pub fn has_clue(&self, clue_key: &str) -> bool {
        self.clues.iter().any(|c| c == clue_key)
    }
}

/// One successfully loaded catalog document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    version: String,
    clues: Vec<Clue>,
    suspects: Vec<Suspect>,
    /// Suspect clue references that name no clue record. Tolerated at
    /// load; rendering treats each one as a lookup miss.
    dangling_refs: Vec<String>,
    loaded_at: DateTime<Utc>,
}

impl Catalog {
    /// Assemble a catalog from already-validated parts
    pub(crate) fn from_parts(
        version: String,
        clues: Vec<Clue>,
        suspects: Vec<Suspect>,
        dangling_refs: Vec<String>,
    ) -> Self {
        Self {
            version,
            clues,
            suspects,
            dangling_refs,
            loaded_at: Utc::now(),
        }
    }

    /// The catalog's opaque version label
    pub fn version(&self) -> String {
        self.version.clone()
    }

    /// All clues, in display order (independent copy)
    pub fn all_clues(&self) -> Vec<Clue> {
        self.clues.clone()
    }

    /// All suspects, in display order (independent copy)
    pub fn all_suspects(&self) -> Vec<Suspect> {
        self.suspects.clone()
    }

    /// Look up one clue by key; `None` is a lookup miss, not an error
    pub fn clue_by_key(&self, key: &str) -> Option<Clue> {
        self.clues.iter().find(|c| c.key == key).cloned()
    }

    /// Look up one suspect by key; `None` is a lookup miss, not an error
    pub fn suspect_by_key(&self, key: &str) -> Option<Suspect> {
        self.suspects.iter().find(|s| s.key == key).cloned()
    }

    /// The clue key set, in display order. This is the selection-state
    /// domain for this catalog.
    pub fn clue_keys(&self) -> Vec<String> {
        self.clues.iter().map(|c| c.key.clone()).collect()
    }

    /// Suspect clue references that resolved to no clue record at load
    pub fn dangling_refs(&self) -> &[String] {
        &self.dangling_refs
    }

    /// Number of clue records
    pub fn clue_count(&self) -> usize {
        self.clues.len()
    }

    /// Number of suspect records
    pub fn suspect_count(&self) -> usize {
        self.suspects.len()
    }

    /// When this catalog was installed
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}
