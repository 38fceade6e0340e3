//! HTTP catalog source
//!
//! A thin reqwest GET. No retries, no custom timeouts: retrieval failure
//! surfaces as a load-failure condition and the user decides what next.

use async_trait::async_trait;
use reqwest::Client;

use super::errors::{FetchError, FetchResult};
use super::source::CatalogSource;

/// Retrieves the catalog document over HTTP(S)
#[derive(Debug, Clone, Default)]
pub struct HttpCatalogSource {
    client: Client,
}

impl HttpCatalogSource {
    /// Create a source with a fresh client
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch(&self, url: &str) -> FetchResult<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))
    }
}
