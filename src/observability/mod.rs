//! Observability subsystem for cluedex
//!
//! Structured one-line JSON logging plus a typed event vocabulary.
//!
//! # Principles
//!
//! 1. Observability is read-only: no side effects on deduction
//! 2. Deterministic output (sorted fields, stable event names)
//! 3. Synchronous writes, no background threads
//! 4. Every controller log line carries the session id

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event at INFO with fields
pub fn log_event(event: Event, fields: &[(&str, &str)]) {
    Logger::info(event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event_does_not_panic() {
        log_event(Event::BootStart, &[]);
        log_event(Event::ConfigLoaded, &[("catalog_url", "data/catalog.json")]);
    }
}
