//! Field names, selectors and the per-page extraction schema.

use crate::constants::SEGMENT_SEPARATOR;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three fields extracted from every listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Title,
    Link,
    Location,
}

impl FieldName {
    /// Every field, in the order schemas are inferred and reported.
    pub const ALL: [FieldName; 3] = [FieldName::Title, FieldName::Link, FieldName::Location];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Title => "title",
            FieldName::Link => "link",
            FieldName::Location => "location",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Root-to-element path in its string form, e.g. `html > body > ul.jobs > li.job`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selector(String);

impl Selector {
    pub fn new(selector: impl Into<String>) -> Self {
        Self(selector.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path segments, root first. Empty segments are skipped.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0
            .split(SEGMENT_SEPARATOR)
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Selector {
    fn from(selector: &str) -> Self {
        Self::new(selector)
    }
}

impl From<String> for Selector {
    fn from(selector: String) -> Self {
        Self(selector)
    }
}

/// Selectors for one page layout, keyed by field.
///
/// Inference always produces all three selectors. A schema read back from the
/// cache document may carry any subset; missing fields extract as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Selector>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Selector>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Selector>,
}

impl Schema {
    pub fn get(&self, field: FieldName) -> Option<&Selector> {
        match field {
            FieldName::Title => self.title.as_ref(),
            FieldName::Link => self.link.as_ref(),
            FieldName::Location => self.location.as_ref(),
        }
    }

    pub fn set(&mut self, field: FieldName, selector: Selector) {
        let slot = match field {
            FieldName::Title => &mut self.title,
            FieldName::Link => &mut self.link,
            FieldName::Location => &mut self.location,
        };
        *slot = Some(selector);
    }

    /// Present selectors in field order.
    pub fn selectors(&self) -> impl Iterator<Item = (FieldName, &Selector)> {
        FieldName::ALL
            .into_iter()
            .filter_map(move |field| self.get(field).map(|selector| (field, selector)))
    }

    pub fn is_complete(&self) -> bool {
        FieldName::ALL.iter().all(|field| self.get(*field).is_some())
    }
}
