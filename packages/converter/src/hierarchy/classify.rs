//! Block classification by heading keyword.

use crate::config::{BOOK_KEYWORD, CHAPTER_KEYWORD, PART_KEYWORD};

/// Structural role of a normalized block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Book heading (contains `KİTAP`).
    Book,
    /// Part heading (contains `KISIM`).
    Part,
    /// Chapter heading (contains `BÖLÜM`).
    Chapter,
    /// Anything else: article lines, separators, stray text.
    Content,
}

/// Classify a normalized block.
///
/// Keywords are tried from the outermost level inwards, so a block that
/// happens to contain several keywords takes the highest level.
///
/// # Examples
/// ```
/// use kanun_converter::hierarchy::{classify_block, BlockKind};
///
/// assert_eq!(classify_block("BİRİNCİ KİTAP"), BlockKind::Book);
/// assert_eq!(classify_block("Madde 1 - Kanun"), BlockKind::Content);
/// ```
pub fn classify_block(text: &str) -> BlockKind {
    if text.contains(BOOK_KEYWORD) {
        BlockKind::Book
    } else if text.contains(PART_KEYWORD) {
        BlockKind::Part
    } else if text.contains(CHAPTER_KEYWORD) {
        BlockKind::Chapter
    } else {
        BlockKind::Content
    }
}
