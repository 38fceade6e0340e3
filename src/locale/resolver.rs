//! Localized field resolution
//!
//! For each preferred tag in order, the tag is truncated to its primary
//! subtag (`fr-CA` becomes `fr`) and `<base>_<subtag>` is looked up on the
//! record; the first present value wins. When no preferred tag yields a
//! value, `<base>_<default locale>` is the final fallback. When that is
//! also absent the result is `None` and callers must render a definite
//! empty or placeholder value, never propagate the absence outward.

use crate::catalog::{Clue, LocalizedText, Suspect};

use super::preferences::LocalePreferences;

/// A record carrying locale-suffixed text fields
pub trait Localized {
    /// The record's localized field set
    fn text(&self) -> &LocalizedText;
}

impl Localized for Clue {
    fn text(&self) -> &LocalizedText {
        &self.text
    }
}

impl Localized for Suspect {
    fn text(&self) -> &LocalizedText {
        &self.text
    }
}

/// Resolve a localized field on a record, following the preference order
/// and the default-locale fallback.
pub fn resolve<'a, R: Localized>(
    record: &'a R,
    field_base: &str,
    prefs: &LocalePreferences,
    default_locale: &str,
) -> Option<&'a str> {
    let text = record.text();

    for tag in prefs.tags() {
        let subtag = primary_subtag(tag);
        if subtag.is_empty() {
            continue;
        }
        let field_name = format!("{}_{}", field_base, subtag);
        if let Some(value) = text.get(&field_name) {
            return Some(value);
        }
    }

    text.get(&format!("{}_{}", field_base, default_locale))
}

/// Text before the first `-` of a locale tag (`fr-CA` becomes `fr`)
fn primary_subtag(tag: &str) -> &str {
    tag.split('-').next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LocalizedText;

    struct Record(LocalizedText);

    impl Localized for Record {
        fn text(&self) -> &LocalizedText {
            &self.0
        }
    }

    fn record(fields: &[(&str, &str)]) -> Record {
        Record(fields.iter().copied().collect())
    }

    #[test]
    fn test_primary_subtag_truncation() {
        assert_eq!(primary_subtag("fr-CA"), "fr");
        assert_eq!(primary_subtag("en"), "en");
    }

    #[test]
    fn test_first_preferred_tag_wins() {
        let rec = record(&[("name_fr", "Fantôme"), ("name_en", "Ghost")]);
        let prefs = LocalePreferences::new(vec!["fr-CA".to_string(), "en-US".to_string()]);
        assert_eq!(resolve(&rec, "name", &prefs, "en"), Some("Fantôme"));
    }

    #[test]
    fn test_falls_through_to_later_preference() {
        let rec = record(&[("name_en", "Ghost")]);
        let prefs = LocalePreferences::new(vec!["fr-CA".to_string(), "en-US".to_string()]);
        assert_eq!(resolve(&rec, "name", &prefs, "en"), Some("Ghost"));
    }

    #[test]
    fn test_default_locale_fallback() {
        let rec = record(&[("name_en", "Ghost")]);
        let prefs = LocalePreferences::new(vec!["de".to_string()]);
        // Falls back to name_en only because "en" is the default locale
        assert_eq!(resolve(&rec, "name", &prefs, "en"), Some("Ghost"));
        assert_eq!(resolve(&rec, "name", &prefs, "ja"), None);
    }

    #[test]
    fn test_no_value_anywhere_is_none() {
        let rec = record(&[("details_en", "...")]);
        let prefs = LocalePreferences::new(vec!["en".to_string()]);
        assert_eq!(resolve(&rec, "name", &prefs, "en"), None);
    }

    #[test]
    fn test_empty_preference_list_uses_default() {
        let rec = record(&[("name_en", "Ghost")]);
        let prefs = LocalePreferences::new(Vec::new());
        assert_eq!(resolve(&rec, "name", &prefs, "en"), Some("Ghost"));
    }
}
