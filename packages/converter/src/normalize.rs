//! Block text normalization.
//!
//! Word exports carry non-breaking spaces, hard line breaks inside
//! paragraphs, typographic dashes and footnote markers written as `[12]`.
//! Everything downstream works on the canonical form produced here.

use regex::Regex;
use std::sync::LazyLock;

/// Bracketed integer footnote marker, e.g. `[12]`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static FOOTNOTE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([0-9]+)\]").expect("valid regex"));

/// Normalize whitespace and dashes without touching footnote markers.
///
/// - non-breaking spaces become spaces
/// - each line break becomes a space
/// - en and em dashes become `-`
/// - leading and trailing whitespace is trimmed
pub fn normalize_text(text: &str) -> String {
    text.replace("\r\n", " ")
        .replace(['\u{a0}', '\n', '\r'], " ")
        .replace(['\u{2013}', '\u{2014}'], "-")
        .trim()
        .to_string()
}

/// Normalize a content block and rewrite footnote markers to `[^n]`.
///
/// # Examples
/// ```
/// use kanun_converter::normalize::normalize_block;
///
/// assert_eq!(normalize_block("\u{a0}Madde 1 – Kanun[3]\n"), "Madde 1 - Kanun[^3]");
/// ```
pub fn normalize_block(text: &str) -> String {
    let text = normalize_text(text);
    FOOTNOTE_MARKER.replace_all(&text, "[^$1]").into_owned()
}
