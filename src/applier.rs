//! Applying a schema to a page to produce job records.

use crate::canonical::canonicalize;
use crate::job::JobRecord;
use crate::query::StructuralQuery;
use crate::schema::{FieldName, Schema};
use scraper::{ElementRef, Html};

/// Extracts job records from raw markup with a cached or freshly inferred schema.
///
/// Each field selector is canonicalized, translated and run against the whole
/// page. Records are then assembled by position: record `i` takes the `i`-th
/// title, link and location match. The record count is the longest of the
/// three match lists. Fields are not correlated by a shared ancestor, so a page
/// that emits the three fields in different orders yields misaligned records.
pub fn apply_schema(html: &str, schema: &Schema) -> Vec<JobRecord> {
    let document = Html::parse_document(html);
    apply_schema_to_document(&document, schema)
}

/// [`apply_schema`] for an already parsed page.
pub fn apply_schema_to_document(document: &Html, schema: &Schema) -> Vec<JobRecord> {
    let titles = select_field(document, schema, FieldName::Title);
    let links = select_field(document, schema, FieldName::Link);
    let locations = select_field(document, schema, FieldName::Location);

    let count = titles.len().max(links.len()).max(locations.len());

    (0..count)
        .map(|i| JobRecord {
            title: titles.get(i).map(|el| element_text(*el)).unwrap_or_default(),
            link: links
                .get(i)
                .and_then(|el| el.value().attr("href"))
                .unwrap_or_default()
                .to_string(),
            location: locations
                .get(i)
                .map(|el| element_text(*el))
                .unwrap_or_default(),
        })
        .collect()
}

fn select_field<'a>(document: &'a Html, schema: &Schema, field: FieldName) -> Vec<ElementRef<'a>> {
    let Some(selector) = schema.get(field) else {
        return Vec::new();
    };

    let query = StructuralQuery::from_selector(&canonicalize(selector));
    let matches = query.select(document);
    log::debug!("{} query {} matched {} elements", field, query, matches.len());
    matches
}

/// Whole text content of an element, whitespace collapsed.
fn element_text(element: ElementRef<'_>) -> String {
    let text: String = element.text().collect();
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Selector;

    fn schema(title: &str, link: &str, location: &str) -> Schema {
        Schema {
            title: Some(Selector::from(title)),
            link: Some(Selector::from(link)),
            location: Some(Selector::from(location)),
        }
    }

    #[test]
    fn pairs_fields_by_position() {
        let html = r#"<html><body><ul>
            <li class="job"><h3>Backend <em>Engineer</em></h3><a href="/jobs/1">Apply</a><span>Remote</span></li>
            <li class="job"><h3>Designer</h3><a href="/jobs/2">Apply</a><span>Berlin</span></li>
        </ul></body></html>"#;

        let jobs = apply_schema(
            html,
            &schema(
                "html > body > ul > li.job > h3",
                "html > body > ul > li.job > a",
                "html > body > ul > li.job > span",
            ),
        );

        assert_eq!(
            jobs,
            vec![
                JobRecord::new("Backend Engineer", "/jobs/1", "Remote"),
                JobRecord::new("Designer", "/jobs/2", "Berlin"),
            ]
        );
    }

    #[test]
    fn shorter_lists_pad_with_empty_fields() {
        let html = r#"<html><body><div class="jobs">
            <p class="t">A</p><p class="t">B</p><p class="t">C</p>
            <a href="/a">x</a>
            <i>Remote</i><i>Paris</i>
        </div></body></html>"#;

        let jobs = apply_schema(
            html,
            &schema(
                "html > body > div.jobs > p.t",
                "html > body > div.jobs > a",
                "html > body > div.jobs > i",
            ),
        );

        assert_eq!(jobs.len(), 3);
        assert_eq!(jobs[0], JobRecord::new("A", "/a", "Remote"));
        assert_eq!(jobs[2], JobRecord::new("C", "", ""));
    }

    #[test]
    fn link_without_href_is_empty() {
        let html = r#"<html><body><div><span>Ops</span></div></body></html>"#;
        let jobs = apply_schema(
            html,
            &schema("body > div > span", "body > div > span", "body > div > b"),
        );
        assert_eq!(jobs, vec![JobRecord::new("Ops", "", "")]);
    }

    #[test]
    fn partial_schema_extracts_present_fields() {
        let html = r#"<html><body><h2>Ops</h2><h2>QA</h2></body></html>"#;
        let schema = Schema {
            title: Some(Selector::from("html > body > h2")),
            ..Schema::default()
        };
        let jobs = apply_schema(html, &schema);
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[1], JobRecord::new("QA", "", ""));
    }

    #[test]
    fn utility_classes_still_match_after_canonicalization() {
        let html = r#"<html><body>
            <div class="grid md:grid-cols-3 max-w-[100vw]">
                <a class="!font-bold" href="/jobs/1">Platform Engineer</a>
            </div>
        </body></html>"#;
        let link = "html > body > div.grid.md:grid-cols-3.max-w-[100vw] > a.!font-bold";
        let jobs = apply_schema(html, &schema(link, link, "html > body > div > p"));
        assert_eq!(jobs, vec![JobRecord::new("Platform Engineer", "/jobs/1", "")]);
    }

    #[test]
    fn empty_document_yields_no_records() {
        let jobs = apply_schema(
            "",
            &schema("html > body > h2", "html > body > a", "html > body > p"),
        );
        assert!(jobs.is_empty());
    }
}
