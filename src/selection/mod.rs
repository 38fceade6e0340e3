//! Clue selection subsystem for cluedex
//!
//! The user's tri-state knowledge about each clue, mutated only through
//! the defined toggle operations. Each mutation is followed by a full
//! re-synchronization from a complete snapshot; nothing is incremental.

mod mark;
mod state;

pub use mark::ClueMark;
pub use state::SelectionState;
