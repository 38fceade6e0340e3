//! View phase
//!
//! The phase is implicit in what was last rendered, never persisted. It
//! is exposed so tests and the interactive prompt can observe which view
//! the controller last requested.

use std::fmt;

/// Which view the controller last requested
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewPhase {
    /// No catalog installed yet; clue toggles are ignored
    Loading,
    /// Full suspect list, no constraint asserted
    Listing,
    /// More than one suspect remains under the current constraints
    Filtering {
        /// How many suspects remain
        count: usize,
    },
    /// Exactly one suspect remains; its detail is shown automatically
    SingleMatch {
        /// The remaining suspect's key
        key: String,
    },
    /// No suspect is consistent; the user must relax a clue
    NoMatch,
}

impl ViewPhase {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewPhase::Loading => "loading",
            ViewPhase::Listing => "listing",
            ViewPhase::Filtering { .. } => "filtering",
            ViewPhase::SingleMatch { .. } => "single-match",
            ViewPhase::NoMatch => "no-match",
        }
    }
}

impl fmt::Display for ViewPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_display() {
        assert_eq!(ViewPhase::Loading.to_string(), "loading");
        assert_eq!(ViewPhase::Filtering { count: 3 }.to_string(), "filtering");
        assert_eq!(
            ViewPhase::SingleMatch {
                key: "s1".to_string()
            }
            .to_string(),
            "single-match"
        );
    }
}
