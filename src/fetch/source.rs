//! Catalog source trait
//!
//! The one asynchronous operation in the whole core: given a location,
//! return the raw catalog document body, or a structured failure carrying
//! a transport status and message.

use async_trait::async_trait;

use super::errors::FetchResult;

/// An external collaborator that retrieves the raw catalog document
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the raw document at `url`
    async fn fetch(&self, url: &str) -> FetchResult<String>;
}

#[async_trait]
impl CatalogSource for Box<dyn CatalogSource> {
    async fn fetch(&self, url: &str) -> FetchResult<String> {
        (**self).fetch(url).await
    }
}

/// A source that always serves one fixed document. Used for embedded
/// catalogs and as the test double in controller scenarios.
#[derive(Debug, Clone)]
pub struct StaticCatalogSource {
    body: String,
}

impl StaticCatalogSource {
    /// Serve the given document body for every fetch
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    async fn fetch(&self, _url: &str) -> FetchResult<String> {
        Ok(self.body.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_source_ignores_url() {
        let source = StaticCatalogSource::new("{}");
        assert_eq!(source.fetch("anything").await.unwrap(), "{}");
        assert_eq!(source.fetch("else").await.unwrap(), "{}");
    }
}
