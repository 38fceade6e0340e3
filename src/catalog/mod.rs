//! Catalog subsystem for cluedex
//!
//! The catalog is the canonical data: clue records, suspect records, and
//! an opaque version label, parsed once per load from a JSON document.
//!
//! # Design Principles
//!
//! - Constructed once per successful load, replaced wholesale on reload
//! - Never partially mutated; a failed parse installs nothing
//! - Accessors return independent copies; canonical state cannot leak
//! - A missing key is a lookup miss (`None`), never an error

mod errors;
mod loader;
mod types;

pub use errors::{CatalogError, CatalogResult};
pub use types::{Catalog, Clue, LocalizedText, Suspect};
