//! Conversion pipeline that ties all components together.

use std::fs;
use std::path::Path;

use crate::config::{validate_input_path, validate_output_path};
use crate::error::Result;
use crate::footnotes::extract_footnotes;
use crate::hierarchy::build_hierarchy;
use crate::html::{content_block_texts, decode_document, parse_html};
use crate::normalize::normalize_block;
use crate::render::{save_json, save_markdown};
use crate::types::Document;

/// Result of converting one document.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// The rebuilt hierarchy and footnote table.
    pub document: Document,

    /// Non-fatal findings, e.g. references to footnotes that do not exist.
    pub warnings: Vec<String>,
}

/// Convert an HTML document held in memory.
///
/// # Errors
/// Fails only when the content container is missing.
pub fn convert_html(html: &str) -> Result<Conversion> {
    let dom = parse_html(html);

    let blocks: Vec<String> = content_block_texts(&dom)?
        .iter()
        .map(|block| normalize_block(block))
        .collect();
    tracing::debug!(blocks = blocks.len(), "Normalized content blocks");

    let books = build_hierarchy(&blocks);
    let footnotes = extract_footnotes(&dom);
    let document = Document::new(books, footnotes);

    let warnings = dangling_footnote_warnings(&document);
    for warning in &warnings {
        tracing::warn!("{warning}");
    }

    let stats = document.stats();
    tracing::info!(
        books = stats.books,
        parts = stats.parts,
        chapters = stats.chapters,
        articles = stats.articles,
        footnotes = stats.footnotes,
        "Converted document"
    );

    Ok(Conversion { document, warnings })
}

/// Convert raw document bytes, detecting the character encoding.
pub fn convert_bytes(bytes: &[u8]) -> Result<Conversion> {
    convert_html(&decode_document(bytes))
}

/// Read `input`, convert it and write both outputs.
///
/// Paths are validated before anything is read or written.
pub fn convert_file(input: &Path, json_output: &Path, markdown_output: &Path) -> Result<Conversion> {
    validate_input_path(input)?;
    validate_output_path(json_output)?;
    validate_output_path(markdown_output)?;

    let bytes = fs::read(input)?;
    let conversion = convert_bytes(&bytes)?;

    save_json(&conversion.document, json_output)?;
    save_markdown(&conversion.document, markdown_output)?;

    Ok(conversion)
}

/// Warn about `[^n]` references in article lines with no footnote text.
fn dangling_footnote_warnings(document: &Document) -> Vec<String> {
    let footnotes = &document.footnotes;
    document
        .articles()
        .flat_map(move |article| {
            article
                .footnote_references()
                .filter(move |id| footnotes.get(*id).is_none())
                .map(move |id| {
                    format!(
                        "Article {}: footnote [^{id}] has no definition",
                        article.number
                    )
                })
        })
        .collect()
}
