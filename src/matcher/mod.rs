//! Matcher subsystem for cluedex
//!
//! Pure functions from catalog plus selection state to the consistent
//! suspect subset and the still-discriminating clue set. No I/O, no
//! logging, no stored state: every call recomputes from a full snapshot.

mod filter;
mod liveness;

pub use filter::match_suspects;
pub use liveness::live_clues;
