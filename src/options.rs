//! Configuration options for schema learning and page fetching.
//!
//! This module provides [`ScraperOptions`] and [`ScraperOptionsBuilder`].
//!
//! ## Example
//!
//! ```rust
//! use jobscout::ScraperOptions;
//! use std::time::Duration;
//!
//! // Using default options
//! let options = ScraperOptions::default();
//! assert_eq!(options.fetch_timeout, Duration::from_secs(10));
//!
//! // Using builder for custom options
//! let options = ScraperOptions::builder()
//!     .cache_path("/tmp/schemas.json")
//!     .fetch_timeout(Duration::from_secs(30))
//!     .require_shared_container(true)
//!     .build();
//! ```

use crate::constants::{DEFAULT_CACHE_PATH, DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use std::path::PathBuf;
use std::time::Duration;

/// Configuration options for [`JobExtractor`](crate::JobExtractor) and
/// [`HttpFetcher`](crate::HttpFetcher).
#[derive(Debug, Clone)]
pub struct ScraperOptions {
    /// Location of the persisted schema cache document.
    ///
    /// Default: `job_structure_cache.json`
    pub cache_path: PathBuf,

    /// Deadline for a single page fetch.
    ///
    /// A fetch that exceeds it fails that request only; it is not retried.
    ///
    /// Default: `10s`
    pub fetch_timeout: Duration,

    /// `User-Agent` header sent with page fetches.
    ///
    /// Default: `Mozilla/5.0`
    pub user_agent: String,

    /// Reject schemas whose field selectors share no listing container.
    ///
    /// Records are paired by position across the three field queries. When
    /// this is `true`, inference additionally requires the title, link and
    /// location selectors to have a common ancestor deeper than `html > body`,
    /// which rules out fields drawn from unrelated parts of the page.
    ///
    /// Default: `false`
    pub require_shared_container: bool,
}

impl Default for ScraperOptions {
    fn default() -> Self {
        Self {
            cache_path: PathBuf::from(DEFAULT_CACHE_PATH),
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            require_shared_container: false,
        }
    }
}

impl ScraperOptions {
    /// Creates a new builder for ScraperOptions
    pub fn builder() -> ScraperOptionsBuilder {
        ScraperOptionsBuilder::default()
    }
}

/// Builder for [`ScraperOptions`].
#[derive(Default)]
pub struct ScraperOptionsBuilder {
    cache_path: Option<PathBuf>,
    fetch_timeout: Option<Duration>,
    user_agent: Option<String>,
    require_shared_container: Option<bool>,
}

impl ScraperOptionsBuilder {
    /// Set the schema cache location
    pub fn cache_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cache_path = Some(path.into());
        self
    }

    /// Set the per-fetch deadline
    pub fn fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Require a shared listing container across field selectors
    pub fn require_shared_container(mut self, require: bool) -> Self {
        self.require_shared_container = Some(require);
        self
    }

    /// Build the ScraperOptions
    pub fn build(self) -> ScraperOptions {
        let defaults = ScraperOptions::default();
        ScraperOptions {
            cache_path: self.cache_path.unwrap_or(defaults.cache_path),
            fetch_timeout: self.fetch_timeout.unwrap_or(defaults.fetch_timeout),
            user_agent: self.user_agent.unwrap_or(defaults.user_agent),
            require_shared_container: self
                .require_shared_container
                .unwrap_or(defaults.require_shared_container),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_falls_back_to_defaults() {
        let options = ScraperOptions::builder().user_agent("jobscout/0.1").build();
        assert_eq!(options.user_agent, "jobscout/0.1");
        assert_eq!(options.cache_path, PathBuf::from("job_structure_cache.json"));
        assert_eq!(options.fetch_timeout, Duration::from_secs(10));
        assert!(!options.require_shared_container);
    }
}
