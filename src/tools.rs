//! Tool-facing operations that always answer with text.
//!
//! These are the entry points an agent-facing host exposes. Each one fetches
//! a page, runs the pipeline and renders the outcome as a message; every
//! failure is converted into a descriptive message instead of propagating,
//! so one bad page never takes the host down.
//!
//! Extraction is synchronous and may wait on the summarizer for as long as a
//! model call takes, so it runs on tokio's blocking pool. Other pages keep
//! being served by the runtime meanwhile.

use crate::error::ScrapeError;
use crate::extractor::{Extraction, JobExtractor};
use crate::fetch::PageFetcher;
use crate::job::JobRecord;
use crate::normalizer::normalize_markup;
use crate::summarizer::ListingSummarizer;
use std::sync::Arc;

/// Fetch + extract operations for career pages.
pub struct CareerTools<F, S> {
    fetcher: F,
    extractor: Arc<JobExtractor<S>>,
}

impl<F, S> CareerTools<F, S>
where
    F: PageFetcher,
    S: ListingSummarizer + Send + Sync + 'static,
{
    pub fn new(fetcher: F, extractor: JobExtractor<S>) -> Self {
        Self::with_shared_extractor(fetcher, Arc::new(extractor))
    }

    /// Tools over an extractor that other parts of the host also use.
    pub fn with_shared_extractor(fetcher: F, extractor: Arc<JobExtractor<S>>) -> Self {
        Self { fetcher, extractor }
    }

    pub fn extractor(&self) -> &JobExtractor<S> {
        &self.extractor
    }

    /// Jobs listed on a career page, one line per job.
    ///
    /// The page URL is the schema cache key.
    pub async fn get_jobs_from_url(&self, career_page_url: &str) -> String {
        let url = career_page_url.trim();
        if url.is_empty() {
            return "No career page URL given.".to_string();
        }

        let html = match self.fetcher.fetch_page(url).await {
            Ok(html) => html,
            Err(e) => return describe_fetch_failure(url, &e),
        };

        let extractor = Arc::clone(&self.extractor);
        let page = url.to_string();
        let outcome =
            tokio::task::spawn_blocking(move || extractor.extract_jobs(&page, &html)).await;

        match outcome {
            Ok(Ok(Extraction::Jobs(jobs))) => render_jobs(url, &jobs),
            Ok(Ok(Extraction::NoJobsFound)) => format!("No structured jobs found for {}", url),
            Ok(Err(e)) if e.is_no_match() || e.is_inconsistent_schema() => {
                log::warn!("Could not infer structure for {}: {}", url, e);
                format!("Failed to infer structure for {}: {}", url, e)
            }
            Ok(Err(e)) => {
                log::error!("Error extracting jobs from {}: {}", url, e);
                format!("Error extracting jobs from {}: {}", url, e)
            }
            Err(e) => {
                log::error!("Extraction task for {} did not finish: {}", url, e);
                format!("Error extracting jobs from {}: {}", url, e)
            }
        }
    }

    /// Normalized text of a single job posting page.
    pub async fn get_job_page_content(&self, url: &str) -> String {
        match self.fetcher.fetch_page(url.trim()).await {
            Ok(html) => normalize_markup(&html),
            Err(e) => describe_fetch_failure(url.trim(), &e),
        }
    }
}

fn describe_fetch_failure(url: &str, error: &ScrapeError) -> String {
    log::warn!("{}", error);
    match error {
        ScrapeError::Fetch { message, .. } => format!("Failed to fetch {}: {}", url, message),
        other => format!("Failed to fetch {}: {}", url, other),
    }
}

/// Renders jobs as a bulleted list with links resolved against the page URL.
///
/// ```rust
/// use jobscout::{render_jobs, JobRecord};
///
/// let jobs = vec![
///     JobRecord::new("Account Manager", "/career/account-manager/", "NEW YORK"),
///     JobRecord::new("VP Marketing", "", ""),
/// ];
/// assert_eq!(
///     render_jobs("https://example.com/careers", &jobs),
///     "Jobs at https://example.com/careers:\n\n\
///      - Account Manager (NEW YORK) (https://example.com/career/account-manager/)\n\
///      - VP Marketing"
/// );
/// ```
pub fn render_jobs(page_url: &str, jobs: &[JobRecord]) -> String {
    let lines: Vec<String> = jobs
        .iter()
        .map(|job| {
            let mut line = format!("- {}", job.title);
            if !job.location.is_empty() {
                line.push_str(&format!(" ({})", job.location));
            }
            if !job.link.is_empty() {
                line.push_str(&format!(" ({})", job.absolute_link(page_url)));
            }
            line
        })
        .collect();

    format!("Jobs at {}:\n\n{}", page_url, lines.join("\n"))
}
