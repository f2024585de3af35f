//! Compact text rendering of a page for the listing summarizer.
//!
//! Noise elements are dropped with their subtrees, link targets are written
//! inline as `text [href]`, and whitespace is collapsed so the summarizer
//! receives one short line per visible text run.

use crate::constants::{is_noise_tag, REGEXPS};
use scraper::{ElementRef, Html};

/// Renders raw markup as compact plain text with inlined link targets.
///
/// ```rust
/// use jobscout::normalize_markup;
///
/// let html = r#"<html><head><title>Careers</title></head><body>
///     <nav>Home | About</nav>
///     <h1 class="hero">Open   roles</h1>
///     <a class="btn" href="/jobs/1">Backend <b>Engineer</b></a>
///     <script>track()</script>
/// </body></html>"#;
///
/// assert_eq!(normalize_markup(html), "Open roles\nBackend Engineer [/jobs/1]");
/// ```
///
/// Entities are decoded in the output, so text such as `&lt;Core&gt;` comes
/// out as `<Core>`. Feeding the result back in parses those brackets as
/// markup, which makes the function idempotent only on text without `<`.
pub fn normalize_markup(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut chunks = Vec::new();
    collect_chunks(document.root_element(), &mut chunks);
    collapse_whitespace(&chunks.join("\n"))
}

/// Collapses horizontal whitespace to one space and newline runs to a single
/// newline, then trims.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    let text = REGEXPS.horizontal_whitespace.replace_all(text, " ");
    let text = REGEXPS.newline_whitespace.replace_all(&text, "\n");
    text.trim().to_string()
}

fn collect_chunks(element: ElementRef<'_>, chunks: &mut Vec<String>) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            push_chunk(chunks, text);
            continue;
        }

        let Some(child) = ElementRef::wrap(child) else {
            continue;
        };
        let name = child.value().name();
        if is_noise_tag(name) {
            continue;
        }

        if name.eq_ignore_ascii_case("a") {
            if let Some(href) = child.value().attr("href") {
                push_chunk(chunks, &format!("{} [{}]", anchor_label(child), href));
                continue;
            }
        }

        collect_chunks(child, chunks);
    }
}

/// Visible text of an anchor: its stripped text runs joined by single spaces.
fn anchor_label(anchor: ElementRef<'_>) -> String {
    let mut runs = Vec::new();
    collect_chunks(anchor, &mut runs);
    runs.join(" ")
}

fn push_chunk(chunks: &mut Vec<String>, text: &str) {
    let trimmed = text.trim();
    if !trimmed.is_empty() {
        chunks.push(trimmed.to_string());
    }
}
