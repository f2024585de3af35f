//! Rewriting built selectors into a portable canonical form.
//!
//! Utility-first stylesheets put tokens in `class` that carry no structural
//! meaning for matching: arbitrary values in brackets, responsive or state
//! prefixes, `!` emphasis markers. These are rewritten away before a selector
//! is translated, together with the leading `html` segment, which every
//! document has and the translated query starts from implicitly.

use crate::constants::REGEXPS;
use crate::schema::Selector;

/// Canonical form of a selector.
///
/// Applied in order, each rule idempotent and unable to re-trigger an earlier one:
///
/// 1. drop class tokens carrying bracketed values: `.max-w-[100vw]`
/// 2. strip state prefixes from class tokens: `.md:hover:pt-24` → `.pt-24`
/// 3. strip emphasis markers: `.!rounded` → `.rounded`
/// 4. drop a leading `html` segment
///
/// ```rust
/// use jobscout::{canonicalize, Selector};
///
/// let built = Selector::from("html > body > div.max-w-[100vw].md:pt-24.!rounded > a");
/// assert_eq!(canonicalize(&built).as_str(), "body > div.pt-24.rounded > a");
/// ```
pub fn canonicalize(selector: &Selector) -> Selector {
    let rewritten = REGEXPS.bracket_class.replace_all(selector.as_str(), "");
    let rewritten = REGEXPS.state_prefix.replace_all(&rewritten, ".");
    let rewritten = REGEXPS.emphasis_prefix.replace_all(&rewritten, ".");
    let rewritten = REGEXPS.root_prefix.replace(&rewritten, "");
    Selector::new(rewritten.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canon(selector: &str) -> String {
        canonicalize(&Selector::from(selector)).as_str().to_string()
    }

    #[test]
    fn drops_bracketed_tokens_only() {
        assert_eq!(
            canon("body > div.flex.top-[0.5rem].grid-cols-[1fr_2fr]/50.p-4 > span"),
            "body > div.flex.p-4 > span"
        );
    }

    #[test]
    fn strips_stacked_state_prefixes() {
        assert_eq!(
            canon("body > a.lg:hover:underline.text-sm"),
            "body > a.underline.text-sm"
        );
    }

    #[test]
    fn strips_emphasis_after_prefix() {
        assert_eq!(canon("body > p.md:!mt-0.!!font-bold"), "body > p.mt-0.font-bold");
    }

    #[test]
    fn removes_qualified_root_segment() {
        assert_eq!(canon("html.no-js.dark > body > ul"), "body > ul");
        assert_eq!(canon("html#root > body"), "body");
    }

    #[test]
    fn leaves_ids_alone() {
        assert_eq!(
            canon("html > body > div#careers > li"),
            "body > div#careers > li"
        );
    }

    #[test]
    fn is_idempotent() {
        let samples = [
            "html > body > div.max-w-[100vw].md:pt-24 > ul.!list > li.job",
            "html.sm:x > body > main#app > div.[&>*]:p-2.card",
            "body > section > h2",
        ];
        for sample in samples {
            let once = canon(sample);
            assert_eq!(canon(&once), once, "not idempotent for {sample}");
        }
    }
}
