//! Controller subsystem for cluedex
//!
//! One independently constructible controller per session, collaborators
//! injected: a catalog source, a render surface, and a configuration. No
//! shared globals, so sessions and tests run in isolation.

mod controller;
mod errors;
mod phase;

pub use controller::Controller;
pub use errors::{SessionError, SessionResult};
pub use phase::ViewPhase;
