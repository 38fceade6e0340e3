//! Locale preference list
//!
//! An ordered list of locale tags, most preferred first: at most one
//! explicit user override, then the environment-reported tags. Setting a
//! new override replaces the previous one; exactly zero or one override
//! is active at a time.

use std::env;

/// Ordered locale preferences for resolving localized text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalePreferences {
    override_tag: Option<String>,
    env_tags: Vec<String>,
}

impl LocalePreferences {
    /// Build from an explicit tag list (tests, embedding)
    pub fn new(tags: Vec<String>) -> Self {
        Self {
            override_tag: None,
            env_tags: tags,
        }
    }

    /// Build from the process environment: `LANGUAGE` (colon-separated,
    /// in order), falling back to `LC_ALL` then `LANG`, with any codeset
    /// suffix (`.UTF-8`) stripped. `C` and `POSIX` carry no language.
    pub fn from_env() -> Self {
        let mut tags = Vec::new();

        if let Ok(language) = env::var("LANGUAGE") {
            for tag in language.split(':') {
                if let Some(tag) = normalize_tag(tag) {
                    tags.push(tag);
                }
            }
        }

        if tags.is_empty() {
            for var in ["LC_ALL", "LANG"] {
                if let Ok(value) = env::var(var) {
                    if let Some(tag) = normalize_tag(&value) {
                        tags.push(tag);
                        break;
                    }
                }
            }
        }

        Self::new(tags)
    }

    /// Set or replace the single explicit override
    pub fn set_override(&mut self, tag: impl Into<String>) {
        self.override_tag = Some(tag.into());
    }

    /// Remove the explicit override, leaving the environment tags
    pub fn clear_override(&mut self) {
        self.override_tag = None;
    }

    /// The active override, when one is set
    pub fn override_tag(&self) -> Option<&str> {
        self.override_tag.as_deref()
    }

    /// Full preference list in priority order: override first, then the
    /// environment tags.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags = Vec::with_capacity(self.env_tags.len() + 1);
        if let Some(ref tag) = self.override_tag {
            tags.push(tag.as_str());
        }
        tags.extend(self.env_tags.iter().map(String::as_str));
        tags
    }
}

/// Strip a codeset suffix (`fr_FR.UTF-8` becomes `fr_FR`), map `_` to `-`,
/// and drop empty or language-less values.
fn normalize_tag(raw: &str) -> Option<String> {
    let tag = raw.split('.').next().unwrap_or("").trim();
    if tag.is_empty() || tag == "C" || tag == "POSIX" {
        return None;
    }
    Some(tag.replace('_', "-"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_goes_first() {
        let mut prefs = LocalePreferences::new(vec!["en-US".to_string()]);
        prefs.set_override("fr-CA");
        assert_eq!(prefs.tags(), vec!["fr-CA", "en-US"]);
    }

    #[test]
    fn test_override_replaces_previous_override() {
        let mut prefs = LocalePreferences::new(vec!["en-US".to_string()]);
        prefs.set_override("fr-CA");
        prefs.set_override("de");
        // Exactly one override active at a time
        assert_eq!(prefs.tags(), vec!["de", "en-US"]);
    }

    #[test]
    fn test_clear_override_restores_environment_order() {
        let mut prefs = LocalePreferences::new(vec!["en-US".to_string()]);
        prefs.set_override("fr-CA");
        prefs.clear_override();
        assert_eq!(prefs.tags(), vec!["en-US"]);
        assert!(prefs.override_tag().is_none());
    }

    #[test]
    fn test_normalize_tag_strips_codeset() {
        assert_eq!(normalize_tag("fr_FR.UTF-8"), Some("fr-FR".to_string()));
        assert_eq!(normalize_tag("en"), Some("en".to_string()));
        assert_eq!(normalize_tag("C"), None);
        assert_eq!(normalize_tag("POSIX"), None);
        assert_eq!(normalize_tag(""), None);
    }
}
