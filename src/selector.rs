//! Building root-to-element paths from located elements.

use crate::constants::SEGMENT_SEPARATOR;
use crate::schema::Selector;
use scraper::ElementRef;
use std::fmt;

/// What narrows a path segment beyond its tag name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Qualifier {
    None,
    /// Class tokens in source order.
    Classes(Vec<String>),
    Id(String),
}

/// One level of an [`ElementPath`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegment {
    pub tag: String,
    pub qualifier: Qualifier,
}

impl PathSegment {
    /// Segment for a single element. Classes win over the id; an empty
    /// `class` attribute counts as no class.
    pub fn from_element(element: ElementRef<'_>) -> Self {
        let value = element.value();
        let classes: Vec<String> = value
            .attr("class")
            .map(|class| class.split_whitespace().map(String::from).collect())
            .unwrap_or_default();

        let qualifier = if !classes.is_empty() {
            Qualifier::Classes(classes)
        } else if let Some(id) = value.attr("id").filter(|id| !id.is_empty()) {
            Qualifier::Id(id.to_string())
        } else {
            Qualifier::None
        };

        Self {
            tag: value.name().to_string(),
            qualifier,
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)?;
        match &self.qualifier {
            Qualifier::None => Ok(()),
            Qualifier::Classes(classes) => {
                for class in classes {
                    write!(f, ".{}", class)?;
                }
                Ok(())
            }
            Qualifier::Id(id) => write!(f, "#{}", id),
        }
    }
}

/// The ancestor chain from the document root down to one element.
///
/// Built deterministically: the same element always yields the same path.
/// Elements at symmetric positions in a repeated template (every `li.job` in
/// a list, say) yield the same path as well, which is what lets one selector
/// stand for a whole column of listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementPath {
    segments: Vec<PathSegment>,
}

impl ElementPath {
    /// Walks from `element` up to, but not including, the document node.
    ///
    /// ```rust
    /// use jobscout::{locate_field, ElementPath};
    /// use scraper::Html;
    ///
    /// let document = Html::parse_document(
    ///     r#"<div id="app"><ul class="jobs list"><li class="job"><h3>SRE</h3></li></ul></div>"#,
    /// );
    /// let element = locate_field(&document, "SRE").unwrap();
    /// let path = ElementPath::from_element(element);
    /// assert_eq!(
    ///     path.to_selector().as_str(),
    ///     "html > body > div#app > ul.jobs.list > li.job > h3"
    /// );
    /// ```
    pub fn from_element(element: ElementRef<'_>) -> Self {
        let mut segments: Vec<PathSegment> = std::iter::once(element)
            .chain(element.ancestors().filter_map(ElementRef::wrap))
            .map(PathSegment::from_element)
            .collect();
        segments.reverse();
        Self { segments }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn to_selector(&self) -> Selector {
        Selector::new(self.to_string())
    }
}

impl fmt::Display for ElementPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(SEGMENT_SEPARATOR)?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

/// Selector for a located element.
pub fn build_selector(element: ElementRef<'_>) -> Selector {
    ElementPath::from_element(element).to_selector()
}
