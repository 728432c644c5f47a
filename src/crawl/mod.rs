//! Site crawling
//!
//! Fetches documentation pages one at a time and extracts each with a
//! [`PageExtractor`]. Results are keyed by URL.

pub mod sitemap;

pub use sitemap::{discover, filter_urls, parse_locations};

use crate::config::LabelPolicy;
use crate::error::{Error, Result};
use crate::extract::{PageExtractor, PageResult, SiteResult};

/// Crawls pages and aggregates their snippet fingerprints
pub struct SiteCrawler {
    client: reqwest::Client,
    extractor: PageExtractor,
}

impl SiteCrawler {
    /// Create a crawler around an extractor
    pub fn new(extractor: PageExtractor) -> Self {
        Self {
            client: reqwest::Client::new(),
            extractor,
        }
    }

    /// Use a preconfigured HTTP client
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// HTTP client shared by page and sitemap requests
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Discover pages from a sitemap, then crawl them
    pub async fn crawl_sitemap(&self, sitemap_url: &str, filter: Option<&str>) -> Result<SiteResult> {
        let urls = discover(&self.client, sitemap_url, filter).await?;
        self.crawl(&urls).await
    }

    /// Crawl pages sequentially
    ///
    /// Under [`LabelPolicy::Strict`] the first failing page aborts the crawl;
    /// otherwise it is logged and left out of the result. A formatter that
    /// cannot be run aborts the crawl under either policy.
    pub async fn crawl(&self, urls: &[String]) -> Result<SiteResult> {
        let mut site = SiteResult::new();

        for (i, url) in urls.iter().enumerate() {
            tracing::info!("[{}/{}] {}", i + 1, urls.len(), url);

            match self.crawl_page(url).await {
                Ok(page) => {
                    tracing::debug!(url = %url, snippets = page.len(), "Page extracted");
                    site.insert(url.clone(), page);
                }
                Err(e) if self.extractor.policy() == LabelPolicy::Lenient && !e.aborts_run() => {
                    tracing::warn!("Skipping page {}: {}", url, e);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(site)
    }

    async fn crawl_page(&self, url: &str) -> Result<PageResult> {
        let body = self.fetch(url).await?;
        self.extractor.extract_html(&body).await
    }

    async fn fetch(&self, url: &str) -> Result<String> {
        let fetch_error = |reason: String| Error::Fetch {
            url: url.to_string(),
            reason,
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| fetch_error(e.to_string()))?;

        if !response.status().is_success() {
            return Err(fetch_error(format!("HTTP {}", response.status())));
        }

        response.text().await.map_err(|e| fetch_error(e.to_string()))
    }
}
