//! cluedex - a tri-state deduction aid
//!
//! Given a catalog of suspects characterized by clues, and a user who
//! marks clues as present, absent, or unknown, cluedex narrows the
//! suspect list to those consistent with the marks and surfaces which
//! clues can still discriminate.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod controller;
pub mod fetch;
pub mod locale;
pub mod matcher;
pub mod observability;
pub mod render;
pub mod selection;
