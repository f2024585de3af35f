//! Retrieving career pages over HTTP.

use crate::error::{Result, ScrapeError};
use crate::options::ScraperOptions;
use std::future::Future;

/// Source of raw page markup.
pub trait PageFetcher {
    /// Raw markup at `url`, or [`ScrapeError::Fetch`].
    fn fetch_page(&self, url: &str) -> impl Future<Output = Result<String>> + Send;
}

/// [`PageFetcher`] backed by a `reqwest` client.
///
/// Every request carries the configured user agent and is bounded by
/// [`ScraperOptions::fetch_timeout`]. Non-success statuses are failures.
/// Nothing is retried.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(options: &ScraperOptions) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(options.fetch_timeout)
            .user_agent(options.user_agent.as_str())
            .build()
            .map_err(|e| ScrapeError::Fetch {
                url: String::new(),
                message: format!("client initialization failed: {}", e),
            })?;
        Ok(Self { client })
    }

    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String> {
        let fetch_error = |e: reqwest::Error| {
            let message = if e.is_timeout() {
                "request timed out".to_string()
            } else {
                e.to_string()
            };
            ScrapeError::Fetch {
                url: url.to_string(),
                message,
            }
        };

        log::debug!("Fetching {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(fetch_error)?;

        response.text().await.map_err(fetch_error)
    }
}
