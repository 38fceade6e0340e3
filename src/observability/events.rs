//! Observability events for cluedex
//!
//! Every observable occurrence in a session has an explicit, typed event.
//! A no-match outcome is a normal condition and logs at INFO; lookup
//! misses and guarded toggles log at WARN; load failures log at ERROR.

use std::fmt;

/// Observable events in a cluedex session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & lifecycle
    /// Session startup begins
    BootStart,
    /// Session ready: catalog installed, listing rendered
    BootComplete,
    /// Session ended by the user
    SessionEnd,

    // Configuration
    /// Configuration resolved (file + flags)
    ConfigLoaded,

    // Catalog lifecycle
    /// Catalog retrieval begins
    CatalogFetchStart,
    /// Raw catalog document retrieved
    CatalogFetchComplete,
    /// Catalog retrieval failed (transport or status)
    CatalogFetchFailed,
    /// Raw document parsed into a catalog
    CatalogParsed,
    /// Catalog installed wholesale, selection domain reset
    CatalogInstalled,

    // Deduction
    /// A clue mark changed
    SelectionChanged,
    /// Every clue mark reset to unknown
    SelectionCleared,
    /// Matched set recomputed from a full selection snapshot
    MatchComputed,
    /// A suspect's detail view was rendered
    DetailShown,

    // Locale
    /// Locale override changed; localized text re-resolved
    LocaleChanged,

    // Recoverable misses
    /// A requested clue or suspect key names no record
    LookupMiss,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "CLUEDEX_STARTUP_BEGIN",
            Event::BootComplete => "CLUEDEX_STARTUP_COMPLETE",
            Event::SessionEnd => "SESSION_END",

            Event::ConfigLoaded => "CONFIG_LOADED",

            Event::CatalogFetchStart => "CATALOG_FETCH_BEGIN",
            Event::CatalogFetchComplete => "CATALOG_FETCH_COMPLETE",
            Event::CatalogFetchFailed => "CATALOG_FETCH_FAILED",
            Event::CatalogParsed => "CATALOG_PARSED",
            Event::CatalogInstalled => "CATALOG_INSTALLED",

            Event::SelectionChanged => "SELECTION_CHANGED",
            Event::SelectionCleared => "SELECTION_CLEARED",
            Event::MatchComputed => "MATCH_COMPUTED",
            Event::DetailShown => "DETAIL_SHOWN",

            Event::LocaleChanged => "LOCALE_CHANGED",

            Event::LookupMiss => "LOOKUP_MISS",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_events_have_string_representation() {
        let events = [
            Event::BootStart,
            Event::BootComplete,
            Event::SessionEnd,
            Event::ConfigLoaded,
            Event::CatalogFetchStart,
            Event::CatalogFetchComplete,
            Event::CatalogFetchFailed,
            Event::CatalogParsed,
            Event::CatalogInstalled,
            Event::SelectionChanged,
            Event::SelectionCleared,
            Event::MatchComputed,
            Event::DetailShown,
            Event::LocaleChanged,
            Event::LookupMiss,
        ];

        for event in events {
            let s = event.as_str();
            assert!(!s.is_empty());
            // Verify all uppercase format
            assert!(s.chars().all(|c| c.is_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_event_display() {
        assert_eq!(format!("{}", Event::BootStart), "CLUEDEX_STARTUP_BEGIN");
        assert_eq!(format!("{}", Event::MatchComputed), "MATCH_COMPUTED");
    }
}
