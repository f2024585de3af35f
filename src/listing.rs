//! Example listings returned by the listing summarizer.
//!
//! The summarizer answers in free-form text that is expected to contain one
//! JSON array of objects. [`extract_example_records`] pulls the first such
//! array out of the reply, ignoring any commentary or markdown around it.

use crate::constants::REGEXPS;
use crate::error::{Result, ScrapeError};
use crate::schema::FieldName;
use serde::Deserialize;

/// Example field values for one real listing on a page.
///
/// Only used while a schema is being inferred.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ExampleRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Accepted from the summarizer but not part of any schema.
    #[serde(default)]
    pub department: Option<String>,
}

impl ExampleRecord {
    /// The trimmed value for a field, or `None` when absent or blank.
    pub fn value(&self, field: FieldName) -> Option<&str> {
        let value = match field {
            FieldName::Title => self.title.as_deref(),
            FieldName::Link => self.link.as_deref(),
            FieldName::Location => self.location.as_deref(),
        };
        value.map(str::trim).filter(|v| !v.is_empty())
    }
}

/// Extracts the first JSON array of objects from a summarizer reply.
///
/// Every `[` followed by `{` is tried in order; the first position from which
/// a complete array of example objects parses wins, and anything after the
/// closing bracket is ignored.
///
/// # Errors
///
/// * [`ScrapeError::NoJsonArray`] when the reply contains no array of objects
///   or only empty ones.
/// * [`ScrapeError::InvalidJsonArray`] when candidates exist but none parse.
pub fn extract_example_records(reply: &str) -> Result<Vec<ExampleRecord>> {
    let mut last_error = None;

    for candidate in REGEXPS.json_array_start.find_iter(reply) {
        let mut stream = serde_json::Deserializer::from_str(&reply[candidate.start()..])
            .into_iter::<Vec<ExampleRecord>>();

        match stream.next() {
            Some(Ok(records)) if !records.is_empty() => return Ok(records),
            Some(Ok(_)) | None => continue,
            Some(Err(e)) => last_error = Some(e),
        }
    }

    match last_error {
        Some(e) => {
            log::warn!("Listing summary holds no parseable JSON array: {}", e);
            Err(ScrapeError::InvalidJsonArray(e.to_string()))
        }
        None => Err(ScrapeError::NoJsonArray),
    }
}
