//! Error types for schema inference, caching and page fetching.

use crate::schema::FieldName;
use thiserror::Error;

/// Result type alias for jobscout operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Errors that can occur while learning or applying a page schema
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Page could not be retrieved (network error, timeout, non-success status)
    #[error("Failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    /// The summarizer reply holds no JSON array of objects
    #[error("No JSON array found in listing summary")]
    NoJsonArray,

    /// A JSON array was found but could not be parsed into example records
    #[error("Invalid JSON array in listing summary: {0}")]
    InvalidJsonArray(String),

    /// None of the example values for a field could be located in the page
    #[error("No example value for '{field}' could be located in the page")]
    NoExampleLocated { field: FieldName },

    /// Example values for a field resolved to more than one selector
    #[error("Inconsistent selectors for '{field}': {}", .selectors.join(", "))]
    InconsistentSchema {
        field: FieldName,
        selectors: Vec<String>,
    },

    /// Field selectors do not share a listing container below the page body
    #[error("Field selectors share no listing container: {}", .selectors.join(", "))]
    NoSharedContainer { selectors: Vec<String> },

    /// The listing summarizer failed
    #[error("Listing summarizer error: {0}")]
    Summarizer(String),

    /// Reading or writing the schema cache file failed
    #[error("Schema cache I/O error: {0}")]
    CacheIo(#[from] std::io::Error),

    /// The schema cache file is not a valid schema document
    #[error("Schema cache format error: {0}")]
    CacheFormat(#[from] serde_json::Error),
}

impl ScrapeError {
    /// True for every way the consistency check can reject a page.
    pub fn is_inconsistent_schema(&self) -> bool {
        matches!(
            self,
            ScrapeError::NoExampleLocated { .. }
                | ScrapeError::InconsistentSchema { .. }
                | ScrapeError::NoSharedContainer { .. }
        )
    }

    /// True when the summarizer reply could not be turned into examples.
    pub fn is_no_match(&self) -> bool {
        matches!(
            self,
            ScrapeError::NoJsonArray | ScrapeError::InvalidJsonArray(_)
        )
    }
}
