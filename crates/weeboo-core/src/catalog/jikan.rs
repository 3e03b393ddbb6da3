use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use super::wire::decode_entries;
use super::{CatalogBackend, CatalogResult};
use crate::CatalogError;

/// Public Jikan v4 API root.
pub const DEFAULT_BASE_URL: &str = "https://api.jikan.moe/v4";

/// Catalog backed by the Jikan REST API (an unofficial MyAnimeList mirror).
pub struct JikanCatalog {
    base_url: String,
    client: reqwest::Client,
    /// Per-request timeout. `None` lets a hung request hang.
    timeout: Option<Duration>,
}

impl JikanCatalog {
    pub fn new(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn anime_url(&self) -> String {
        format!("{}/anime", self.base_url)
    }

    fn finish(&self, builder: reqwest::RequestBuilder) -> Result<reqwest::Request, CatalogError> {
        let builder = builder.header("User-Agent", "WeeBoo");
        let builder = match self.timeout {
            Some(t) => builder.timeout(t),
            None => builder,
        };
        Ok(builder.build()?)
    }

    /// Build the unfiltered listing request.
    pub fn default_request(&self) -> Result<reqwest::Request, CatalogError> {
        self.finish(self.client.get(self.anime_url()))
    }

    /// Build the title search request, sorted ascending by title.
    pub fn search_request(&self, text: &str) -> Result<reqwest::Request, CatalogError> {
        self.finish(self.client.get(self.anime_url()).query(&[
            ("q", text),
            ("order_by", "title"),
            ("sort", "asc"),
        ]))
    }

    async fn execute(&self, request: reqwest::Request) -> CatalogResult {
        tracing::debug!(url = %request.url(), "catalog request");
        let resp = self.client.execute(request).await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status));
        }

        let body = resp.text().await?;
        Ok(decode_entries(&body)?)
    }
}

impl CatalogBackend for JikanCatalog {
    fn name(&self) -> &str {
        "Jikan"
    }

    fn list_default<'a>(&'a self) -> Pin<Box<dyn Future<Output = CatalogResult> + Send + 'a>> {
        Box::pin(async move {
            let request = self.default_request()?;
            self.execute(request).await
        })
    }

    fn search_titles<'a>(
        &'a self,
        text: &'a str,
    ) -> Pin<Box<dyn Future<Output = CatalogResult> + Send + 'a>> {
        Box::pin(async move {
            let request = self.search_request(text)?;
            self.execute(request).await
        })
    }
}
