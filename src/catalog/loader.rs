//! Catalog document parsing
//!
//! The document is JSON with three top-level fields:
//!
//! ```json
//! {
//!   "version": "codex-1.4.2",
//!   "clues":    [ { "key": "emf5", "name_en": "EMF level 5", ... } ],
//!   "suspects": [ { "key": "banshee", "name_en": "...", "details_en": "...",
//!                   "clues": ["emf5", "orbs"] } ]
//! }
//! ```
//!
//! Parsing is strict: unknown top-level fields are rejected, record fields
//! other than `key`/`clues` must be locale-suffixed strings, keys must be
//! non-empty and unique per list. A suspect clue reference that names no
//! clue record is tolerated (logged as a lookup miss, kept on the record);
//! anything else malformed fails the whole load and installs nothing.

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use crate::observability::{Event, Logger};

use super::errors::{CatalogError, CatalogResult};
use super::types::{Catalog, Clue, LocalizedText, Suspect};

impl Catalog {
    /// Parse a raw catalog document into a catalog, or fail with no
    /// partial catalog installed.
    pub fn parse(raw: &str) -> CatalogResult<Catalog> {
        let root: Value = serde_json::from_str(raw).map_err(|e| CatalogError::Parse {
            reason: e.to_string(),
        })?;

        let root = as_object(&root, "<document>")?;
        reject_unknown_fields(root, &["version", "clues", "suspects"])?;

        let version = require_string(root, "version")?;
        let clues = parse_clues(require_array(root, "clues")?)?;
        let suspects = parse_suspects(require_array(root, "suspects")?)?;

        let dangling_refs = check_clue_refs(&clues, &suspects);
        for key in &dangling_refs {
            Logger::warn(
                Event::LookupMiss.as_str(),
                &[("kind", "clue"), ("key", key), ("at", "catalog_load")],
            );
        }

        Ok(Catalog::from_parts(version, clues, suspects, dangling_refs))
    }
}

fn parse_clues(records: &[Value]) -> CatalogResult<Vec<Clue>> {
    let mut clues = Vec::with_capacity(records.len());
    let mut seen = BTreeSet::new();

    for (index, record) in records.iter().enumerate() {
        let path = format!("clues[{}]", index);
        let record = as_object(record, &path)?;

        let key = require_key(record, &path)?;
        if !seen.insert(key.clone()) {
            return Err(CatalogError::DuplicateKey { kind: "clue", key });
        }

        let text = collect_localized(record, &path, &["key"])?;
        clues.push(Clue { key, text });
    }

    Ok(clues)
}

fn parse_suspects(records: &[Value]) -> CatalogResult<Vec<Suspect>> {
    let mut suspects = Vec::with_capacity(records.len());
    let mut seen = BTreeSet::new();

    for (index, record) in records.iter().enumerate() {
        let path = format!("suspects[{}]", index);
        let record = as_object(record, &path)?;

        let key = require_key(record, &path)?;
        if !seen.insert(key.clone()) {
            return Err(CatalogError::DuplicateKey {
                kind: "suspect",
                key,
            });
        }

        let clue_field = format!("{}.clues", path);
        let clue_refs = record
            .get("clues")
            .ok_or_else(|| CatalogError::Shape {
                field: clue_field.clone(),
                reason: "missing required field".to_string(),
            })?
            .as_array()
            .ok_or_else(|| CatalogError::Shape {
                field: clue_field.clone(),
                reason: "expected an array of clue keys".to_string(),
            })?;
        let mut clues = Vec::with_capacity(clue_refs.len());
        for clue_ref in clue_refs {
            let clue_key = clue_ref.as_str().ok_or_else(|| CatalogError::Shape {
                field: clue_field.clone(),
                reason: "clue references must be strings".to_string(),
            })?;
            clues.push(clue_key.to_string());
        }

        let text = collect_localized(record, &path, &["key", "clues"])?;
        suspects.push(Suspect { key, text, clues });
    }

    Ok(suspects)
}

/// All remaining record fields must be locale-suffixed strings
/// (`name_en`, `details_fr`). Anything else is a shape error.
fn collect_localized(
    record: &Map<String, Value>,
    path: &str,
    skip: &[&str],
) -> CatalogResult<LocalizedText> {
    let mut text = LocalizedText::new();
    for (field, value) in record {
        if skip.contains(&field.as_str()) {
            continue;
        }
        if !field.contains('_') {
            return Err(CatalogError::Shape {
                field: format!("{}.{}", path, field),
                reason: "expected a locale-suffixed field like 'name_en'".to_string(),
            });
        }
        let value = value.as_str().ok_or_else(|| CatalogError::Shape {
            field: format!("{}.{}", path, field),
            reason: "localized values must be strings".to_string(),
        })?;
        text.insert(field.clone(), value);
    }
    Ok(text)
}

/// Collect suspect clue references that name no clue record, in first-seen
/// order without repeats.
fn check_clue_refs(clues: &[Clue], suspects: &[Suspect]) -> Vec<String> {
    let known: BTreeSet<&str> = clues.iter().map(|c| c.key.as_str()).collect();
    let mut dangling = Vec::new();
    for suspect in suspects {
        for clue_key in &suspect.clues {
            if !known.contains(clue_key.as_str()) && !dangling.contains(clue_key) {
                dangling.push(clue_key.clone());
            }
        }
    }
    dangling
}

fn as_object<'a>(value: &'a Value, path: &str) -> CatalogResult<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| CatalogError::Shape {
        field: path.to_string(),
        reason: "expected a JSON object".to_string(),
    })
}

fn reject_unknown_fields(root: &Map<String, Value>, allowed: &[&str]) -> CatalogResult<()> {
    for field in root.keys() {
        if !allowed.contains(&field.as_str()) {
            return Err(CatalogError::Shape {
                field: field.clone(),
                reason: "unknown top-level field".to_string(),
            });
        }
    }
    Ok(())
}

fn require_string(object: &Map<String, Value>, field: &str) -> CatalogResult<String> {
    object
        .get(field)
        .ok_or_else(|| CatalogError::Shape {
            field: field.to_string(),
            reason: "missing required field".to_string(),
        })?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| CatalogError::Shape {
            field: field.to_string(),
            reason: "expected a string".to_string(),
        })
}

fn require_array<'a>(object: &'a Map<String, Value>, field: &str) -> CatalogResult<&'a [Value]> {
    object
        .get(field)
        .ok_or_else(|| CatalogError::Shape {
            field: field.to_string(),
            reason: "missing required field".to_string(),
        })?
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| CatalogError::Shape {
            field: field.to_string(),
            reason: "expected an array".to_string(),
        })
}

fn require_key(record: &Map<String, Value>, path: &str) -> CatalogResult<String> {
    let key = record
        .get("key")
        .and_then(Value::as_str)
        .ok_or_else(|| CatalogError::Shape {
            field: format!("{}.key", path),
            reason: "missing or non-string key".to_string(),
        })?;
    if key.is_empty() {
        return Err(CatalogError::Shape {
            field: format!("{}.key", path),
            reason: "expected a non-empty string".to_string(),
        });
    }
    Ok(key.to_string())
}
