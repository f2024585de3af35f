//! # jobscout
//!
//! Learns, once per career page, where job titles, links and locations live in
//! the page markup, caches that knowledge and re-extracts job listings from
//! the page on every later visit without asking anyone again.
//!
//! ## Overview
//!
//! Career pages share no common markup. jobscout asks an external
//! text-understanding step (a [`ListingSummarizer`], usually a language model)
//! for a handful of example listings from a page, finds the elements carrying
//! those example values and turns each into a root-to-element selector. When
//! every example of a field resolves to the same selector, the three selectors
//! form the page's [`Schema`], which is stored in the [`SchemaCache`] under the
//! page URL. From then on the schema alone extracts the listings.
//!
//! ## Key Features
//!
//! - **Markup normalization**: compact page text with link targets inlined, for the summarizer
//! - **Field location**: exact own-text match, falling back to link-like attributes
//! - **Consistency check**: one selector per field or no schema at all
//! - **Selector canonicalization**: utility-class noise stripped before matching
//! - **Structural queries**: selectors evaluated directly on the parsed tree
//! - **Persistent cache**: one JSON document, updated atomically per page
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use jobscout::{Extraction, JobExtractor, ScraperOptions};
//!
//! fn ask_model(prompt: &str) -> String {
//!     unimplemented!("call a language model")
//! }
//!
//! let summarizer = |text: &str, page: &str| -> jobscout::Result<String> {
//!     Ok(ask_model(&jobscout::listing_prompt(text, page)))
//! };
//!
//! let extractor = JobExtractor::with_persistent_cache(ScraperOptions::default(), summarizer)?;
//! let html = std::fs::read_to_string("careers.html")?;
//!
//! match extractor.extract_jobs("https://example.com/careers", &html)? {
//!     Extraction::Jobs(jobs) => {
//!         for job in jobs {
//!             println!("{} ({}) {}", job.title, job.location, job.link);
//!         }
//!     }
//!     Extraction::NoJobsFound => println!("No jobs found"),
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Error Handling
//!
//! ```rust,no_run
//! use jobscout::{JobExtractor, ScrapeError, ScraperOptions, SchemaCache};
//! use std::sync::Arc;
//!
//! # let summarizer = |_: &str, _: &str| -> jobscout::Result<String> { Ok(String::new()) };
//! # let html = "";
//! let extractor = JobExtractor::new(
//!     ScraperOptions::default(),
//!     Arc::new(SchemaCache::in_memory()),
//!     summarizer,
//! );
//!
//! match extractor.infer_or_lookup_schema("https://example.com/careers", html) {
//!     Ok(schema) => println!("{:?}", schema),
//!     Err(ScrapeError::InconsistentSchema { field, selectors }) => {
//!         eprintln!("'{}' is rendered by {} templates", field, selectors.len());
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```
//!
//! ## Algorithm
//!
//! Schema inference locates every example value, builds a `tag.class` /
//! `tag#id` path from the document root to each located element and requires
//! all paths of a field to be identical. Application canonicalizes each path,
//! translates it into a strict parent → child traversal, collects every match
//! in document order and pairs the three result lists by position.

mod applier;
mod cache;
mod canonical;
mod constants;
mod error;
mod extractor;
mod fetch;
mod job;
mod listing;
mod locator;
mod normalizer;
mod options;
mod query;
mod schema;
mod selector;
mod summarizer;
mod tools;
mod validator;

// Public exports
pub use applier::{apply_schema, apply_schema_to_document};
pub use cache::SchemaCache;
pub use canonical::canonicalize;
pub use error::{Result, ScrapeError};
pub use extractor::{Extraction, JobExtractor};
pub use fetch::{HttpFetcher, PageFetcher};
pub use job::JobRecord;
pub use listing::{extract_example_records, ExampleRecord};
pub use locator::locate_field;
pub use normalizer::normalize_markup;
pub use options::{ScraperOptions, ScraperOptionsBuilder};
pub use query::{QueryStep, StepPredicate, StructuralQuery};
pub use schema::{FieldName, Schema, Selector};
pub use selector::{build_selector, ElementPath, PathSegment, Qualifier};
pub use summarizer::{listing_prompt, ListingSummarizer};
pub use tools::{render_jobs, CareerTools};
pub use validator::{consistent_selector, infer_schema};
