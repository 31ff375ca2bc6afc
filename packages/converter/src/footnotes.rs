//! Footnote table extraction.
//!
//! Word exports every footnote as a paragraph with class
//! `MsoFootnoteText`: the first child is the back-link anchor whose `name`
//! ends in the footnote id (`_ftn12`), the second child holds the text.

use regex::Regex;
use std::sync::LazyLock;

use markup5ever_rcdom::{Handle, RcDom};

use crate::config::{FOOTNOTE_CLASS, FOOTNOTE_ID_ATTRIBUTE};
use crate::html::{element_children, find_all_by_class, get_attribute, get_text};
use crate::normalize::normalize_text;
use crate::types::FootnoteTable;

/// Trailing digits of a footnote anchor name.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static FOOTNOTE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)$").expect("valid regex"));

/// Extract the numeric id from an anchor name such as `_ftn5` or `ftnX5`.
///
/// # Examples
/// ```
/// use kanun_converter::footnotes::parse_footnote_id;
///
/// assert_eq!(parse_footnote_id("_ftn12"), Some(12));
/// assert_eq!(parse_footnote_id("_ftnref"), None);
/// ```
pub fn parse_footnote_id(name: &str) -> Option<usize> {
    FOOTNOTE_ID.captures(name)?.get(1)?.as_str().parse().ok()
}

/// Read one footnote element as `(id, text)`.
///
/// Returns `None` when the first child carries no id.
pub fn read_footnote(element: &Handle) -> Option<(usize, String)> {
    let children = element_children(element);
    let id = children
        .first()
        .and_then(|anchor| get_attribute(anchor, FOOTNOTE_ID_ATTRIBUTE))
        .and_then(|name| parse_footnote_id(&name))?;

    let text = match children.get(1) {
        Some(body) => normalize_text(&get_text(body)),
        None => {
            tracing::warn!(id, "Footnote has no body element");
            String::new()
        }
    };

    Some((id, text))
}

/// Build the footnote table from every footnote element in the document.
pub fn extract_footnotes(dom: &RcDom) -> FootnoteTable {
    let mut table = FootnoteTable::new();
    let mut skipped = 0usize;

    for element in find_all_by_class(&dom.document, FOOTNOTE_CLASS) {
        match read_footnote(&element) {
            Some((id, text)) => {
                if !table.insert(id, text) {
                    tracing::warn!(id, "Footnote id out of range, skipped");
                    skipped += 1;
                }
            }
            None => skipped += 1,
        }
    }

    tracing::debug!(
        footnotes = table.len(),
        skipped,
        "Extracted footnote table"
    );
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::parse_html;

    fn footnote(name: &str, body: &str) -> String {
        format!(
            r#"<p class="MsoFootnoteText"><a href="" name="{name}"><span>[x]</span></a><span>{body}</span></p>"#
        )
    }

    #[test]
    fn test_parse_footnote_id() {
        assert_eq!(parse_footnote_id("ftnX5"), Some(5));
        assert_eq!(parse_footnote_id("_ftn105"), Some(105));
        assert_eq!(parse_footnote_id("5_ftn"), None);
        assert_eq!(parse_footnote_id(""), None);
        assert_eq!(parse_footnote_id("_ftn\u{663}"), None);
    }

    #[test]
    fn test_extract_footnote_at_zero_based_slot() {
        let html = footnote("ftnX5", "\u{a0} footnote body \u{a0}");
        let table = extract_footnotes(&parse_html(&html));

        assert_eq!(table.get(5), Some("footnote body"));
        assert_eq!(table.get(4), None);
        assert_eq!(table.len(), 1);
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json[4], "footnote body");
    }

    #[test]
    fn test_extract_skips_missing_id() {
        let html = format!(
            r##"<p class="MsoFootnoteText"><a href="#x">sep</a><span>no id</span></p>{}"##,
            footnote("_ftn1", "one")
        );
        let table = extract_footnotes(&parse_html(&html));

        assert_eq!(table.len(), 1);
        assert_eq!(table.get(1), Some("one"));
    }

    #[test]
    fn test_extract_keeps_markers_unrewritten() {
        let html = footnote("_ftn2", "see [3] \u{2013} 2002");
        let table = extract_footnotes(&parse_html(&html));
        assert_eq!(table.get(2), Some("see [3] - 2002"));
    }

    #[test]
    fn test_extract_missing_body_is_empty() {
        let html = r#"<p class="MsoFootnoteText"><a name="_ftn3"></a></p>"#;
        let table = extract_footnotes(&parse_html(html));
        assert_eq!(table.get(3), Some(""));
    }

    #[test]
    fn test_extract_skips_out_of_range_id() {
        let html = format!(
            "{}{}",
            footnote("_ftn99999999999", "corrupt"),
            footnote("_ftn2", "two")
        );
        let table = extract_footnotes(&parse_html(&html));

        assert_eq!(table.len(), 1);
        assert_eq!(table.get(2), Some("two"));
        assert_eq!(table.iter().count(), 1);
    }

    #[test]
    fn test_extract_non_contiguous_ids() {
        let html = format!("{}{}", footnote("_ftn1", "a"), footnote("_ftn4", "d"));
        let table = extract_footnotes(&parse_html(&html));
        assert_eq!(table.iter().collect::<Vec<_>>(), vec![(1, "a"), (4, "d")]);
    }
}
