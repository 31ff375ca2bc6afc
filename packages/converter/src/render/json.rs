//! JSON serialization of the converted legal code.

use crate::error::Result;
use crate::types::Document;

/// Pretty-printed JSON of the whole tree and footnote table.
pub fn render_json(document: &Document) -> Result<String> {
    Ok(serde_json::to_string_pretty(document)?)
}
