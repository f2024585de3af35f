//! Fixed tag lists, defaults and compiled regular expressions.

use once_cell::sync::Lazy;
use regex::Regex;

/// Elements dropped, together with their subtrees, before page text is produced.
pub const NOISE_TAGS: [&str; 19] = [
    "img", "script", "style", "head", "footer", "svg", "iframe", "noscript", "link", "meta",
    "form", "aside", "nav", "canvas", "object", "video", "audio", "picture", "source",
];

/// Attributes searched when no element carries the target as its own text.
pub const LOCATOR_ATTRIBUTES: [&str; 4] = ["href", "value", "data-url", "data-link"];

/// Separator between path segments of a selector.
pub const SEGMENT_SEPARATOR: &str = " > ";

/// Tag used when a selector segment carries no tag name.
pub const PLACEHOLDER_TAG: &str = "div";

pub const DEFAULT_CACHE_PATH: &str = "job_structure_cache.json";
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

pub fn is_noise_tag(name: &str) -> bool {
    NOISE_TAGS.iter().any(|tag| tag.eq_ignore_ascii_case(name))
}

/// Regular expressions shared across the crate.
pub struct Regexps {
    /// A class token carrying a bracketed value, e.g. `.max-w-[100vw]`.
    pub bracket_class: Regex,
    /// One or more `prefix:` markers at the start of a class token.
    pub state_prefix: Regex,
    /// `!` markers at the start of a class token.
    pub emphasis_prefix: Regex,
    /// A leading `html` segment and its separator.
    pub root_prefix: Regex,
    pub horizontal_whitespace: Regex,
    pub newline_whitespace: Regex,
    /// Start of a candidate JSON array of objects.
    pub json_array_start: Regex,
}

pub static REGEXPS: Lazy<Regexps> = Lazy::new(|| Regexps {
    bracket_class: Regex::new(r"\.[^.\s>#\[]*\[[^\]]*\][^.\s>#]*").unwrap(),
    state_prefix: Regex::new(r"\.(?:[^.\s>#:]+:)+").unwrap(),
    emphasis_prefix: Regex::new(r"\.!+").unwrap(),
    root_prefix: Regex::new(r"^\s*html(?:[.#][^\s>]*)?\s*>\s*").unwrap(),
    horizontal_whitespace: Regex::new(r"[^\S\n]+").unwrap(),
    newline_whitespace: Regex::new(r"\s*\n\s*").unwrap(),
    json_array_start: Regex::new(r"\[\s*\{").unwrap(),
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noise_tags_match_case_insensitively() {
        assert!(is_noise_tag("script"));
        assert!(is_noise_tag("SVG"));
        assert!(is_noise_tag("source"));
        assert!(!is_noise_tag("li"));
    }
}
