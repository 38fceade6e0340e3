//! Locale subsystem for cluedex
//!
//! Picks localized text off catalog records given an ordered preference
//! list: at most one explicit user override, then environment-reported
//! tags, then a fixed default locale as the final fallback.

mod preferences;
mod resolver;

pub use preferences::LocalePreferences;
pub use resolver::{resolve, Localized};

/// The fixed fallback locale used when no preferred tag yields text
pub const DEFAULT_LOCALE: &str = "en";
