//! Suspect matching
//!
//! A suspect is consistent with the selection iff every Present-marked
//! clue is in its clue set and every Absent-marked clue is not. Unknown
//! imposes no constraint, so the all-Unknown state keeps every suspect:
//! no constraints means everyone remains a suspect, not "no results".

use crate::catalog::Suspect;
use crate::selection::{ClueMark, SelectionState};

/// The order-preserving subset of `suspects` consistent with `state`
pub fn match_suspects<'a>(suspects: &'a [Suspect], state: &SelectionState) -> Vec<&'a Suspect> {
    suspects
        .iter()
        .filter(|suspect| is_consistent(suspect, state))
        .collect()
}

fn is_consistent(suspect: &Suspect, state: &SelectionState) -> bool {
    for (clue_key, mark) in state.iter() {
        match mark {
            ClueMark::Present if !suspect.has_clue(clue_key) => return false,
            ClueMark::Absent if suspect.has_clue(clue_key) => return false,
            _ => {}
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LocalizedText;

    fn suspect(key: &str, clues: &[&str]) -> Suspect {
        Suspect {
            key: key.to_string(),
            text: LocalizedText::new(),
            clues: clues.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn fixture() -> Vec<Suspect> {
        vec![
            suspect("s1", &["c1", "c2"]),
            suspect("s2", &["c2", "c3"]),
            suspect("s3", &["c3"]),
        ]
    }

    fn state(keys: &[&str]) -> SelectionState {
        let mut s = SelectionState::new();
        s.reset_to(keys.iter().copied());
        s
    }

    #[test]
    fn test_all_unknown_matches_everyone_in_order() {
        let suspects = fixture();
        let s = state(&["c1", "c2", "c3"]);
        let matched = match_suspects(&suspects, &s);
        let keys: Vec<&str> = matched.iter().map(|m| m.key.as_str()).collect();
        assert_eq!(keys, vec!["s1", "s2", "s3"]);
    }

    #[test]
    fn test_present_requires_clue() {
        let suspects = fixture();
        let mut s = state(&["c1", "c2", "c3"]);
        s.mark_present("c1");
        let matched = match_suspects(&suspects, &s);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].key, "s1");
    }

    #[test]
    fn test_absent_excludes_clue() {
        let suspects = fixture();
        let mut s = state(&["c1", "c2", "c3"]);
        s.mark_absent("c2");
        let keys: Vec<&str> = match_suspects(&suspects, &s)
            .iter()
            .map(|m| m.key.as_str())
            .collect();
        assert_eq!(keys, vec!["s3"]);
    }

    #[test]
    fn test_contradiction_matches_nothing() {
        let suspects = fixture();
        let mut s = state(&["c1", "c2", "c3"]);
        s.mark_present("c1");
        s.mark_absent("c2");
        // s1 is the only suspect with c1, and it also has c2
        assert!(match_suspects(&suspects, &s).is_empty());
    }

    #[test]
    fn test_adding_constraints_never_grows_the_match_set() {
        let suspects = fixture();
        let mut s = state(&["c1", "c2", "c3"]);

        let mut previous = match_suspects(&suspects, &s).len();
        for (key, absent) in [("c3", false), ("c1", true), ("c2", false)] {
            if absent {
                s.mark_absent(key);
            } else {
                s.mark_present(key);
            }
            let current = match_suspects(&suspects, &s).len();
            assert!(current <= previous);
            previous = current;
        }
    }
}
