//! Kanun Converter - Turn the Turkish Civil Code HTML export into a
//! hierarchical JSON tree and a Markdown document.
//!
//! The source is a word-processor HTML export without structural markup:
//! Books, Parts, Chapters and Articles are recognized from heading
//! keywords and blank-line separators in a flat stream of paragraphs.
//!
//! # Example
//!
//! ```
//! use kanun_converter::convert_html;
//!
//! let html = r#"<div class="WordSection1">
//!     <p>BİRİNCİ KİTAP</p><p>Kişiler Hukuku</p>
//!     <p>BİRİNCİ KISIM</p><p>Gerçek Kişiler</p>
//!     <p>BİRİNCİ BÖLÜM</p><p>Kişilik</p>
//!     <p>Madde 8 - Hak ehliyeti</p><p>Her insanın hak ehliyeti vardır.</p>
//! </div>"#;
//!
//! let conversion = convert_html(html).unwrap();
//! assert_eq!(conversion.document.books[0].name, "Kişiler Hukuku");
//! assert_eq!(conversion.document.stats().articles, 1);
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Vocabulary, markup constants and path validation
//! - [`types`]: Core data types (Document, Book, Part, Chapter, Article)
//! - [`error`]: Error types and Result alias
//! - [`html`]: HTML parsing, decoding and DOM helpers
//! - [`normalize`]: Block text normalization
//! - [`hierarchy`]: Heading classification and the tree-building state machine
//! - [`footnotes`]: Footnote table extraction
//! - [`render`]: JSON and Markdown output
//! - [`converter`]: The end-to-end pipeline
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod converter;
pub mod error;
pub mod footnotes;
pub mod hierarchy;
pub mod html;
pub mod normalize;
pub mod render;
pub mod types;

// Re-export main functions
pub use converter::{convert_bytes, convert_file, convert_html, Conversion};

// Re-export commonly used items
pub use error::{ConvertError, Result};
pub use types::{Article, Book, Chapter, Document, DocumentStats, FootnoteTable, Part};
