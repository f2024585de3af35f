//! Finding the element that carries an example field value.

use crate::constants::LOCATOR_ATTRIBUTES;
use scraper::{ElementRef, Html};

/// Finds the element holding `target`, or `None` when the page has no such element.
///
/// Text matches take priority over attribute matches across the whole
/// document: the first element in document order whose own text equals the
/// target wins. Only when no element matches by text is the first element
/// whose `href`, `value`, `data-url` or `data-link` attribute contains the
/// target returned. Comparisons ignore leading/trailing whitespace and treat
/// any whitespace run as a single space.
///
/// ```rust
/// use jobscout::locate_field;
/// use scraper::Html;
///
/// let document = Html::parse_document(r#"<ul>
///     <li><span class="title">QA Engineer</span> <a href="/jobs/qa-engineer">Apply</a></li>
/// </ul>"#);
///
/// let title = locate_field(&document, "QA Engineer").unwrap();
/// assert_eq!(title.value().name(), "span");
///
/// let link = locate_field(&document, "/jobs/qa-engineer").unwrap();
/// assert_eq!(link.value().name(), "a");
///
/// assert!(locate_field(&document, "Designer").is_none());
/// ```
pub fn locate_field<'a>(document: &'a Html, target: &str) -> Option<ElementRef<'a>> {
    let target = target.trim();
    if target.is_empty() {
        return None;
    }

    let normalized_target = normalize_space(target);
    let elements: Vec<ElementRef<'a>> = document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .collect();

    elements
        .iter()
        .find(|element| own_text(**element).as_deref() == Some(normalized_target.as_str()))
        .or_else(|| {
            elements
                .iter()
                .find(|element| attribute_contains(**element, target))
        })
        .copied()
}

/// Direct text children of an element, whitespace-normalized; `None` when blank.
fn own_text(element: ElementRef<'_>) -> Option<String> {
    let text: String = element
        .children()
        .filter_map(|child| child.value().as_text().map(|t| &**t))
        .collect();
    let text = normalize_space(&text);
    (!text.is_empty()).then_some(text)
}

fn attribute_contains(element: ElementRef<'_>, target: &str) -> bool {
    LOCATOR_ATTRIBUTES.iter().any(|name| {
        element
            .value()
            .attr(name)
            .map(|value| value.trim().contains(target))
            .unwrap_or(false)
    })
}

fn normalize_space(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
