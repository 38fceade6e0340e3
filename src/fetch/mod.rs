//! Catalog retrieval subsystem for cluedex
//!
//! Retrieval is an external collaborator behind one async trait: given a
//! location, return the raw document body or a structured failure. The
//! core never retries; the latest successful load wins.

mod errors;
mod file;
mod http;
mod source;

pub use errors::{FetchError, FetchResult};
pub use file::FileCatalogSource;
pub use http::HttpCatalogSource;
pub use source::{CatalogSource, StaticCatalogSource};

/// Well-known relative path of the catalog document
pub const DEFAULT_CATALOG_URL: &str = "data/catalog.json";
