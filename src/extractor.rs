//! The extraction pipeline: infer-or-lookup a page schema, then apply it.
//!
//! ## Example
//!
//! ```rust
//! use jobscout::{Extraction, JobExtractor, SchemaCache, ScraperOptions};
//! use std::sync::Arc;
//!
//! let html = r#"<html><body><ul class="jobs">
//!     <li class="job"><h3>Backend Engineer</h3><a href="/jobs/backend">Apply</a><span class="loc">Remote</span></li>
//!     <li class="job"><h3>Designer</h3><a href="/jobs/designer">Apply</a><span class="loc">Berlin</span></li>
//! </ul></body></html>"#;
//!
//! // Stands in for a language model reading the normalized page.
//! let summarizer = |_text: &str, _page: &str| -> jobscout::Result<String> {
//!     Ok(r#"[{"title": "Backend Engineer", "link": "/jobs/backend", "location": "Remote"},
//!            {"title": "Designer", "link": "/jobs/designer", "location": "Berlin"}]"#.to_string())
//! };
//!
//! let cache = Arc::new(SchemaCache::in_memory());
//! let extractor = JobExtractor::new(ScraperOptions::default(), cache, summarizer);
//!
//! match extractor.extract_jobs("https://example.com/careers", html)? {
//!     Extraction::Jobs(jobs) => assert_eq!(jobs.len(), 2),
//!     Extraction::NoJobsFound => unreachable!(),
//! }
//! # Ok::<(), jobscout::ScrapeError>(())
//! ```

use crate::{
    applier::apply_schema_to_document,
    cache::SchemaCache,
    error::Result,
    job::JobRecord,
    listing::extract_example_records,
    normalizer::normalize_markup,
    options::ScraperOptions,
    schema::Schema,
    summarizer::ListingSummarizer,
    validator::infer_schema,
};
use scraper::Html;
use std::sync::Arc;

/// Outcome of a successful extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// At least one record, in document order.
    Jobs(Vec<JobRecord>),
    /// The schema applied cleanly but matched nothing.
    NoJobsFound,
}

impl Extraction {
    pub fn jobs(&self) -> &[JobRecord] {
        match self {
            Extraction::Jobs(jobs) => jobs,
            Extraction::NoJobsFound => &[],
        }
    }
}

/// Learns and applies per-page extraction schemas.
///
/// ## Lifecycle
///
/// The first call for a page identity normalizes the page, asks the
/// [`ListingSummarizer`] for example listings, infers a schema from them and
/// stores it in the [`SchemaCache`]. Every later call for the same identity
/// reuses the cached schema and never consults the summarizer again. Failed
/// inferences write nothing.
///
/// The cache is shared: several extractors, or several threads using one
/// extractor, may work against the same [`SchemaCache`].
pub struct JobExtractor<S> {
    options: ScraperOptions,
    cache: Arc<SchemaCache>,
    summarizer: S,
}

impl<S: ListingSummarizer> JobExtractor<S> {
    pub fn new(options: ScraperOptions, cache: Arc<SchemaCache>, summarizer: S) -> Self {
        Self {
            options,
            cache,
            summarizer,
        }
    }

    /// Loads the cache from [`ScraperOptions::cache_path`] and builds an extractor on it.
    pub fn with_persistent_cache(options: ScraperOptions, summarizer: S) -> Result<Self> {
        let cache = Arc::new(SchemaCache::load(options.cache_path.clone())?);
        Ok(Self::new(options, cache, summarizer))
    }

    pub fn options(&self) -> &ScraperOptions {
        &self.options
    }

    pub fn cache(&self) -> &Arc<SchemaCache> {
        &self.cache
    }

    /// The cached schema for `page`, or a freshly inferred one.
    ///
    /// # Errors
    ///
    /// Summarizer failures, replies without a JSON array, inconsistent
    /// examples and cache write faults. None of them leave a cache entry.
    pub fn infer_or_lookup_schema(&self, page: &str, html: &str) -> Result<Schema> {
        if let Some(schema) = self.cache.get(page) {
            log::debug!("Schema cache hit for {}", page);
            return Ok(schema);
        }

        log::debug!("Schema cache miss for {}", page);
        self.learn_schema(page, html)
    }

    /// Infers a schema even when one is cached, replacing it on success.
    ///
    /// Use after a page layout changed; staleness is never detected automatically.
    pub fn refresh_schema(&self, page: &str, html: &str) -> Result<Schema> {
        log::debug!("Forcing schema inference for {}", page);
        self.learn_schema(page, html)
    }

    /// Applies `schema` to raw markup.
    pub fn apply_schema(&self, html: &str, schema: &Schema) -> Vec<JobRecord> {
        crate::applier::apply_schema(html, schema)
    }

    /// Infer-or-lookup followed by apply.
    pub fn extract_jobs(&self, page: &str, html: &str) -> Result<Extraction> {
        let schema = self.infer_or_lookup_schema(page, html)?;
        let document = Html::parse_document(html);
        let jobs = apply_schema_to_document(&document, &schema);

        if jobs.is_empty() {
            log::info!("No jobs found on {}", page);
            Ok(Extraction::NoJobsFound)
        } else {
            log::info!("Extracted {} jobs from {}", jobs.len(), page);
            Ok(Extraction::Jobs(jobs))
        }
    }

    fn learn_schema(&self, page: &str, html: &str) -> Result<Schema> {
        let page_text = normalize_markup(html);
        let reply = self.summarizer.summarize_listings(&page_text, page)?;
        let examples = extract_example_records(&reply)?;

        let document = Html::parse_document(html);
        let schema = infer_schema(&document, &examples, &self.options)?;

        self.cache.put(page, schema.clone())?;
        Ok(schema)
    }
}
