//! The seam to the external text-understanding step.
//!
//! Schema inference needs a handful of real field values from the page. They
//! come from a [`ListingSummarizer`], typically a language model, that reads
//! the normalized page text and answers with a JSON array of listings. The
//! crate never talks to a model itself; hosts inject an implementation, and
//! tests inject a closure with a fixed reply.

use crate::error::Result;

/// Produces example listings for a page as free-form text.
///
/// The reply is expected to contain one JSON array of objects with at least a
/// `title` and optionally `link`, `location` and `department`. Text around the
/// array is ignored.
///
/// Closures implement the trait, which keeps tests short:
///
/// ```rust
/// use jobscout::ListingSummarizer;
///
/// let stub = |_text: &str, _hint: &str| -> jobscout::Result<String> {
///     Ok(r#"[{"title": "SRE"}]"#.to_string())
/// };
/// assert!(stub.summarize_listings("SRE", "https://example.com/careers").is_ok());
/// ```
pub trait ListingSummarizer {
    /// `page_text` is the normalized page; `page_hint` identifies the page (its URL).
    fn summarize_listings(&self, page_text: &str, page_hint: &str) -> Result<String>;
}

impl<F> ListingSummarizer for F
where
    F: Fn(&str, &str) -> Result<String>,
{
    fn summarize_listings(&self, page_text: &str, page_hint: &str) -> Result<String> {
        self(page_text, page_hint)
    }
}

const LISTING_INSTRUCTIONS: &str = r#"You are a highly accurate text-to-JSON converter specialized in career pages.

Your task is to extract job listings from the simplified text of a company's careers webpage.
The input is plain visible text, already cleaned of irrelevant tags and attributes.
Link targets appear in square brackets right after the link text.

Your goal is to:
- Identify recurring job listing blocks.
- Extract the following fields from each:
    - "title": The job title
    - "link": A link to the job detail page (if available in the text)
    - "location": The location (if provided)
    - "department": The department/category (if provided)

Output requirements:
- Return a list of job objects in pure JSON
- Each object must have at least the "title" field
- Copy every value exactly as it appears in the text
- No explanations. No markdown. No code blocks.

Example output format:
[
  {
    "title": "Frontend Developer",
    "link": "/careers/frontend-developer",
    "location": "Remote",
    "department": "Engineering"
  }
]"#;

/// The prompt a model-backed [`ListingSummarizer`] sends for one page.
///
/// ```rust
/// let prompt = jobscout::listing_prompt("QA Engineer [/jobs/qa]", "https://example.com/careers");
/// assert!(prompt.contains("Domain: https://example.com/careers"));
/// assert!(prompt.ends_with("QA Engineer [/jobs/qa]\n"));
/// ```
pub fn listing_prompt(page_text: &str, page_hint: &str) -> String {
    format!(
        "{}\n\nDomain: {}\n\nCleaned page text:\n{}\n",
        LISTING_INSTRUCTIONS, page_hint, page_text
    )
}
