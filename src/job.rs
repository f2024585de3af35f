//! Job record data structure representing one extracted listing.
//!
//! ## Example
//!
//! ```rust
//! use jobscout::{apply_schema, Schema, Selector};
//!
//! let html = r#"<html><body><ul>
//!     <li class="job"><a href="/jobs/1">Backend Engineer</a><span>Remote</span></li>
//! </ul></body></html>"#;
//!
//! let schema = Schema {
//!     title: Some(Selector::from("html > body > ul > li.job > a")),
//!     link: Some(Selector::from("html > body > ul > li.job > a")),
//!     location: Some(Selector::from("html > body > ul > li.job > span")),
//! };
//!
//! let jobs = apply_schema(html, &schema);
//! assert_eq!(jobs[0].title, "Backend Engineer");
//! assert_eq!(jobs[0].link, "/jobs/1");
//! assert_eq!(jobs[0].location, "Remote");
//! ```

use serde::{Deserialize, Serialize};
use url::Url;

/// One job listing extracted from a career page.
///
/// Records are produced fresh on every extraction and never cached. Fields
/// without a match at the record's position are empty strings.
///
/// ## Serialization
///
/// ```rust
/// use jobscout::JobRecord;
///
/// let job = JobRecord::new("Data Engineer", "/jobs/7", "Berlin");
/// let json = serde_json::to_string(&job).unwrap();
/// assert_eq!(json, r#"{"title":"Data Engineer","link":"/jobs/7","location":"Berlin"}"#);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct JobRecord {
    /// Text of the element matched by the schema's title selector.
    #[serde(default)]
    pub title: String,

    /// `href` of the element matched by the schema's link selector, as written
    /// in the page (often relative).
    #[serde(default)]
    pub link: String,

    /// Text of the element matched by the schema's location selector.
    #[serde(default)]
    pub location: String,
}

impl JobRecord {
    pub fn new(
        title: impl Into<String>,
        link: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            location: location.into(),
        }
    }

    /// The link resolved against the page it was found on.
    ///
    /// Falls back to the raw link when the page URL does not parse or the
    /// link cannot be joined onto it.
    pub fn absolute_link(&self, page_url: &str) -> String {
        Url::parse(page_url)
            .and_then(|base| base.join(&self.link))
            .map(String::from)
            .unwrap_or_else(|_| self.link.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_link_joins_relative_paths() {
        let job = JobRecord::new("QA", "/career/qa/", "");
        assert_eq!(
            job.absolute_link("https://example.com/careers"),
            "https://example.com/career/qa/"
        );
    }

    #[test]
    fn absolute_link_keeps_raw_link_for_opaque_pages() {
        let job = JobRecord::new("QA", "/career/qa/", "");
        assert_eq!(job.absolute_link("not a url"), "/career/qa/");
    }
}
