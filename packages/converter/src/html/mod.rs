//! HTML parsing and DOM helpers.
//!
//! The document is parsed with `html5ever` into a reference-counted DOM
//! (`markup5ever_rcdom`). The helpers in [`utils`] cover the little
//! traversal the converter needs.

mod decode;
mod utils;

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, RcDom};

use crate::config::{CONTENT_CONTAINER_CLASS, CONTENT_CONTAINER_TAG};
use crate::error::{ConvertError, Result};

pub use decode::{declared_charset, decode_document};
pub use utils::{
    descendants, element_children, find_all_by_class, find_by_tag_and_class, get_attribute,
    get_tag_name, get_text, has_class, has_tag, is_element,
};

/// Parse an HTML document leniently, the way browsers do.
pub fn parse_html(html: &str) -> RcDom {
    parse_document(RcDom::default(), Default::default()).one(html)
}

/// Locate the element whose children are the content blocks.
///
/// # Errors
/// `ConvertError::MissingElement` when the document has no container.
pub fn find_content_container(dom: &RcDom) -> Result<Handle> {
    find_by_tag_and_class(&dom.document, CONTENT_CONTAINER_TAG, CONTENT_CONTAINER_CLASS).ok_or_else(
        || ConvertError::MissingElement {
            element: format!("{CONTENT_CONTAINER_TAG}.{CONTENT_CONTAINER_CLASS}"),
            context: "document".to_string(),
        },
    )
}

/// Raw text of every block-level child of the content container.
pub fn content_block_texts(dom: &RcDom) -> Result<Vec<String>> {
    let container = find_content_container(dom)?;
    Ok(element_children(&container).iter().map(get_text).collect())
}
