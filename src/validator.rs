//! Inferring a schema from example listings and checking it for consistency.
//!
//! Every example value is located in the page and turned into a selector.
//! A field is accepted only when all of its located examples agree on one
//! selector; the whole inference fails otherwise. Pages that render a field
//! through more than one template are refused rather than half-extracted.

use crate::constants::SEGMENT_SEPARATOR;
use crate::error::{Result, ScrapeError};
use crate::listing::ExampleRecord;
use crate::locator::locate_field;
use crate::options::ScraperOptions;
use crate::schema::{FieldName, Schema, Selector};
use crate::selector::build_selector;
use scraper::Html;
use std::collections::BTreeSet;

/// Builds a schema from example listings, all-or-nothing.
///
/// Blank example values and values that cannot be located are skipped.
///
/// # Errors
///
/// * [`ScrapeError::NoExampleLocated`] when a field has no located example.
/// * [`ScrapeError::InconsistentSchema`] when a field's examples resolve to
///   more than one selector; `selectors` lists the distinct set, sorted.
/// * [`ScrapeError::NoSharedContainer`] when
///   [`ScraperOptions::require_shared_container`] is set and the three
///   selectors share no ancestor below `html > body`.
pub fn infer_schema(
    document: &Html,
    examples: &[ExampleRecord],
    options: &ScraperOptions,
) -> Result<Schema> {
    let mut schema = Schema::default();

    for field in FieldName::ALL {
        let selector = consistent_selector(document, examples, field)?;
        schema.set(field, selector);
    }

    if options.require_shared_container {
        check_shared_container(&schema)?;
    }

    log::info!(
        "Accepted schema from {} examples: {}",
        examples.len(),
        schema
            .selectors()
            .map(|(field, selector)| format!("{}={}", field, selector))
            .collect::<Vec<_>>()
            .join(", ")
    );
    Ok(schema)
}

/// The one selector every located example of `field` resolves to.
pub fn consistent_selector(
    document: &Html,
    examples: &[ExampleRecord],
    field: FieldName,
) -> Result<Selector> {
    let selectors: BTreeSet<Selector> = examples
        .iter()
        .filter_map(|example| example.value(field))
        .filter_map(|value| locate_field(document, value))
        .map(build_selector)
        .collect();

    let mut distinct = selectors.into_iter();
    match (distinct.next(), distinct.next()) {
        (Some(selector), None) => Ok(selector),
        (None, _) => {
            log::warn!("No example value for '{}' was located", field);
            Err(ScrapeError::NoExampleLocated { field })
        }
        (Some(first), Some(second)) => {
            let selectors: Vec<String> = [first, second]
                .into_iter()
                .chain(distinct)
                .map(|selector| selector.as_str().to_string())
                .collect();
            log::warn!(
                "Inconsistent selectors for '{}': {}",
                field,
                selectors.join(", ")
            );
            Err(ScrapeError::InconsistentSchema { field, selectors })
        }
    }
}

fn check_shared_container(schema: &Schema) -> Result<()> {
    let paths: Vec<Vec<&str>> = schema
        .selectors()
        .map(|(_, selector)| selector.as_str().split(SEGMENT_SEPARATOR).collect())
        .collect();

    let shared = paths
        .iter()
        .skip(1)
        .fold(paths.first().map(Vec::len).unwrap_or(0), |len, path| {
            paths[0]
                .iter()
                .zip(path)
                .take(len)
                .take_while(|(a, b)| a == b)
                .count()
        });

    // `html > body` is common to every selector; a listing container sits below it.
    if shared > 2 {
        return Ok(());
    }

    let selectors: Vec<String> = schema
        .selectors()
        .map(|(_, selector)| selector.as_str().to_string())
        .collect();
    log::warn!(
        "Field selectors share no listing container: {}",
        selectors.join(", ")
    );
    Err(ScrapeError::NoSharedContainer { selectors })
}
