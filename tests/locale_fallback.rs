//! Locale Resolution Tests
//!
//! - Preference order wins: the first tag with a value is used
//! - Tags are truncated to their primary subtag before lookup
//! - The configured default locale is the final fallback
//! - Exactly zero or one explicit override is active at a time

use cluedex::catalog::Catalog;
use cluedex::locale::{resolve, LocalePreferences};
use serde_json::json;

fn fixture() -> Catalog {
    let doc = json!({
        "version": "locale-fixture",
        "clues": [
            { "key": "c1", "name_en": "Footprints", "name_fr": "Empreintes" },
            { "key": "c2", "name_en": "Cold spot" },
            { "key": "c3" }
        ],
        "suspects": [
            {
                "key": "s1",
                "name_en": "Wraith",
                "name_fr": "Spectre",
                "details_en": "<p>Floats.</p>",
                "clues": ["c1"]
            }
        ]
    });
    Catalog::parse(&doc.to_string()).unwrap()
}

/// Preference list ["fr-CA", "en-US"] resolves the fr field.
#[test]
fn test_first_preference_wins_with_subtag_truncation() {
    let catalog = fixture();
    let clue = catalog.clue_by_key("c1").unwrap();
    let prefs = LocalePreferences::new(vec!["fr-CA".to_string(), "en-US".to_string()]);

    assert_eq!(resolve(&clue, "name", &prefs, "en"), Some("Empreintes"));
}

/// With only an en field, ["de"] falls back to en only when "en" is the
/// configured default locale.
#[test]
fn test_default_locale_gates_the_final_fallback() {
    let catalog = fixture();
    let clue = catalog.clue_by_key("c2").unwrap();
    let prefs = LocalePreferences::new(vec!["de".to_string()]);

    assert_eq!(resolve(&clue, "name", &prefs, "en"), Some("Cold spot"));
    assert_eq!(resolve(&clue, "name", &prefs, "ja"), None);
}

/// No localized value anywhere resolves to None; callers render a
/// definite placeholder instead of propagating the absence.
#[test]
fn test_missing_everywhere_is_none() {
    let catalog = fixture();
    let clue = catalog.clue_by_key("c3").unwrap();
    let prefs = LocalePreferences::new(vec!["fr".to_string(), "en".to_string()]);

    assert_eq!(resolve(&clue, "name", &prefs, "en"), None);
}

/// Suspects resolve name and details fields independently.
#[test]
fn test_suspect_fields_resolve_independently() {
    let catalog = fixture();
    let suspect = catalog.suspect_by_key("s1").unwrap();
    let prefs = LocalePreferences::new(vec!["fr".to_string()]);

    // name has a fr value, details only an en value
    assert_eq!(resolve(&suspect, "name", &prefs, "en"), Some("Spectre"));
    assert_eq!(
        resolve(&suspect, "details", &prefs, "en"),
        Some("<p>Floats.</p>")
    );
}

/// An override goes ahead of the environment tags and replaces any
/// previous override rather than stacking.
#[test]
fn test_override_replace_semantics() {
    let catalog = fixture();
    let clue = catalog.clue_by_key("c1").unwrap();
    let mut prefs = LocalePreferences::new(vec!["en-US".to_string()]);

    assert_eq!(resolve(&clue, "name", &prefs, "en"), Some("Footprints"));

    prefs.set_override("fr-CA");
    assert_eq!(resolve(&clue, "name", &prefs, "en"), Some("Empreintes"));

    // A second override replaces the first; fr is no longer preferred
    prefs.set_override("de");
    assert_eq!(prefs.tags(), vec!["de", "en-US"]);
    assert_eq!(resolve(&clue, "name", &prefs, "en"), Some("Footprints"));

    prefs.clear_override();
    assert_eq!(prefs.tags(), vec!["en-US"]);
}
