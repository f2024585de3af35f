//! Translating canonical selectors into structural queries over a parsed page.
//!
//! A query is a strict chain of parent → child steps starting below the
//! document's `html` element. Each step names a tag and either an exact id or
//! a set of class fragments that must all be present. Queries are evaluated
//! directly on the parsed tree; no stylesheet-selector engine is involved.

use crate::constants::PLACEHOLDER_TAG;
use crate::schema::Selector;
use scraper::{ElementRef, Html};
use std::fmt;

/// Condition a step places on an element beyond its tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepPredicate {
    Any,
    /// `id` attribute equals the value.
    Id(String),
    /// `class` attribute contains every fragment.
    Classes(Vec<String>),
}

/// One level of a [`StructuralQuery`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryStep {
    pub tag: String,
    pub predicate: StepPredicate,
}

impl QueryStep {
    fn parse(segment: &str) -> Self {
        if let Some((tag, id)) = segment.split_once('#') {
            return Self {
                tag: tag_or_placeholder(tag),
                predicate: StepPredicate::Id(id.to_string()),
            };
        }

        let mut parts = segment.split('.');
        let tag = tag_or_placeholder(parts.next().unwrap_or_default());
        let classes: Vec<String> = parts
            .filter(|class| !class.is_empty())
            .map(String::from)
            .collect();

        let predicate = if classes.is_empty() {
            StepPredicate::Any
        } else {
            StepPredicate::Classes(classes)
        };
        Self { tag, predicate }
    }

    pub fn matches(&self, element: ElementRef<'_>) -> bool {
        let value = element.value();
        if !value.name().eq_ignore_ascii_case(&self.tag) {
            return false;
        }

        match &self.predicate {
            StepPredicate::Any => true,
            StepPredicate::Id(id) => value.attr("id") == Some(id.as_str()),
            StepPredicate::Classes(classes) => {
                let class_attr = value.attr("class").unwrap_or_default();
                classes.iter().all(|class| class_attr.contains(class.as_str()))
            }
        }
    }
}

impl fmt::Display for QueryStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)?;
        match &self.predicate {
            StepPredicate::Any => Ok(()),
            StepPredicate::Id(id) => write!(f, "[@id='{}']", id),
            StepPredicate::Classes(classes) => {
                let conditions: Vec<String> = classes
                    .iter()
                    .map(|class| format!("contains(@class,'{}')", class))
                    .collect();
                write!(f, "[{}]", conditions.join(" and "))
            }
        }
    }
}

fn tag_or_placeholder(tag: &str) -> String {
    let tag = tag.trim();
    if tag.is_empty() {
        PLACEHOLDER_TAG.to_string()
    } else {
        tag.to_ascii_lowercase()
    }
}

/// A parent → child traversal equivalent to a canonical selector.
///
/// ```rust
/// use jobscout::{Selector, StructuralQuery};
///
/// let query = StructuralQuery::from_selector(&Selector::from("body > ul.jobs > li#first"));
/// assert_eq!(
///     query.to_string(),
///     "/body/ul[contains(@class,'jobs')]/li[@id='first']"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralQuery {
    steps: Vec<QueryStep>,
}

impl StructuralQuery {
    /// Translates a canonical selector. Segments without a tag use `div`.
    pub fn from_selector(selector: &Selector) -> Self {
        Self {
            steps: selector.segments().map(QueryStep::parse).collect(),
        }
    }

    pub fn steps(&self) -> &[QueryStep] {
        &self.steps
    }

    /// All matching elements, in document order.
    pub fn select<'a>(&self, document: &'a Html) -> Vec<ElementRef<'a>> {
        if self.steps.is_empty() {
            return Vec::new();
        }

        let mut frontier = vec![document.root_element()];
        for step in &self.steps {
            frontier = frontier
                .iter()
                .flat_map(|parent| parent.children().filter_map(ElementRef::wrap))
                .filter(|child| step.matches(*child))
                .collect();
            if frontier.is_empty() {
                break;
            }
        }
        frontier
    }
}

impl fmt::Display for StructuralQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            write!(f, "/{}", step)?;
        }
        Ok(())
    }
}
