//! The tri-state clue mark

use serde::{Deserialize, Serialize};
use std::fmt;

/// What the user has asserted about one clue
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClueMark {
    /// No assertion yet; imposes no constraint
    #[default]
    Unknown,
    /// The clue has been observed
    Present,
    /// The clue has been ruled out
    Absent,
}

impl ClueMark {
    /// The next mark in the three-cycle Unknown, Present, Absent, Unknown
    pub fn cycled(self) -> ClueMark {
        match self {
            ClueMark::Unknown => ClueMark::Present,
            ClueMark::Present => ClueMark::Absent,
            ClueMark::Absent => ClueMark::Unknown,
        }
    }

    /// True when the user has made an explicit assertion
    pub fn is_decided(self) -> bool {
        self != ClueMark::Unknown
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ClueMark::Unknown => "unknown",
            ClueMark::Present => "present",
            ClueMark::Absent => "absent",
        }
    }
}

impl fmt::Display for ClueMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_visits_all_states_and_wraps() {
        let start = ClueMark::Unknown;
        let once = start.cycled();
        let twice = once.cycled();
        let thrice = twice.cycled();
        assert_eq!(once, ClueMark::Present);
        assert_eq!(twice, ClueMark::Absent);
        assert_eq!(thrice, start);
    }

    #[test]
    fn test_three_cycles_is_identity_from_any_state() {
        for mark in [ClueMark::Unknown, ClueMark::Present, ClueMark::Absent] {
            assert_eq!(mark.cycled().cycled().cycled(), mark);
        }
    }

    #[test]
    fn test_is_decided() {
        assert!(!ClueMark::Unknown.is_decided());
        assert!(ClueMark::Present.is_decided());
        assert!(ClueMark::Absent.is_decided());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&ClueMark::Present).unwrap(),
            "\"present\""
        );
        let mark: ClueMark = serde_json::from_str("\"absent\"").unwrap();
        assert_eq!(mark, ClueMark::Absent);
    }
}
