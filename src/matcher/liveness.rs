//! Clue liveness
//!
//! A clue is live while at least one suspect in the matched set exhibits
//! it. A dead clue cannot discriminate further and is rendered dimmed.
//! Liveness is computed against the matched set, never the raw catalog,
//! so it reflects remaining ambiguity rather than global coverage.

use std::collections::BTreeSet;

use crate::catalog::Suspect;

/// The union of clue keys over the matched suspects
pub fn live_clues(matched: &[&Suspect]) -> BTreeSet<String> {
    let mut live = BTreeSet::new();
    for suspect in matched {
        for clue_key in &suspect.clues {
            live.insert(clue_key.clone());
        }
    }
    live
}
