//! Local file catalog source

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use super::errors::FetchResult;
use super::source::CatalogSource;

/// Reads the catalog document from the local filesystem. The CLI selects
/// this source when the catalog location has no http(s) scheme.
#[derive(Debug, Clone, Default)]
pub struct FileCatalogSource;

impl FileCatalogSource {
    /// Create a file source
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    async fn fetch(&self, url: &str) -> FetchResult<String> {
        let path = PathBuf::from(url);
        Ok(fs::read_to_string(path).await?)
    }
}
