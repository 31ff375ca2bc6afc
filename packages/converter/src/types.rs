//! Core data types for the converted legal code.
//!
//! The tree is strictly four levels deep: [`Book`] contains [`Part`]s,
//! a Part contains [`Chapter`]s and a Chapter contains [`Article`]s.
//! Field names in the JSON output follow the Turkish vocabulary of the
//! source document.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::config::MAX_FOOTNOTE_ID;

/// Footnote reference as it appears in normalized text (`[^12]`).
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static FOOTNOTE_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\^([0-9]+)\]").expect("valid regex"));

/// A single article (madde).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Article number, possibly with a letter suffix (e.g. "5", "5/A").
    #[serde(rename = "no")]
    pub number: String,

    /// Raw text lines. The first line is the title sentence.
    #[serde(rename = "satirlar")]
    pub lines: Vec<String>,

    /// Sub-clauses. Reserved, never populated by the parser.
    #[serde(rename = "fikralar")]
    pub clauses: Vec<String>,
}

impl Article {
    /// Create an article with a number and lines.
    #[must_use]
    pub fn new(number: impl Into<String>, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            number: number.into(),
            lines: lines.into_iter().map(Into::into).collect(),
            clauses: Vec::new(),
        }
    }

    /// Whether a number has been assigned.
    #[must_use]
    pub fn is_numbered(&self) -> bool {
        !self.number.is_empty()
    }

    /// The title sentence (first line), if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.lines.first().map(String::as_str)
    }

    /// Body lines following the title.
    #[must_use]
    pub fn body(&self) -> &[String] {
        self.lines.get(1..).unwrap_or_default()
    }

    /// Footnote ids referenced from any line, in order of appearance.
    pub fn footnote_references(&self) -> impl Iterator<Item = usize> + '_ {
        self.lines.iter().flat_map(|line| {
            FOOTNOTE_REFERENCE
                .captures_iter(line)
                .filter_map(|caps| caps.get(1)?.as_str().parse::<usize>().ok())
        })
    }
}

/// A chapter (bölüm).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    #[serde(rename = "ad")]
    pub name: String,

    #[serde(rename = "maddeler")]
    pub articles: Vec<Article>,
}

/// A part (kısım).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    #[serde(rename = "ad")]
    pub name: String,

    #[serde(rename = "bolumler")]
    pub chapters: Vec<Chapter>,
}

/// A book (kitap), the outermost level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "ad")]
    pub name: String,

    #[serde(rename = "kisimlar")]
    pub parts: Vec<Part>,
}

/// Footnote texts addressed by their 1-based id.
///
/// Stored zero-based; ids never seen in the source leave `None` gaps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FootnoteTable {
    entries: Vec<Option<String>>,
}

impl FootnoteTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the text for a 1-based footnote id.
    ///
    /// Returns `false` and stores nothing for id 0 or ids above
    /// [`MAX_FOOTNOTE_ID`].
    pub fn insert(&mut self, id: usize, text: impl Into<String>) -> bool {
        let Some(index) = id.checked_sub(1).filter(|_| id <= MAX_FOOTNOTE_ID) else {
            return false;
        };
        if self.entries.len() <= index {
            self.entries.resize(index + 1, None);
        }
        self.entries[index] = Some(text.into());
        true
    }

    /// Text for a 1-based footnote id.
    #[must_use]
    pub fn get(&self, id: usize) -> Option<&str> {
        self.entries.get(id.checked_sub(1)?)?.as_deref()
    }

    /// Populated entries as `(id, text)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(index, text)| Some((index + 1, text.as_deref()?)))
    }

    /// Number of populated entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Whether no footnote is populated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Entity counts per hierarchy level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentStats {
    pub books: usize,
    pub parts: usize,
    pub chapters: usize,
    pub articles: usize,
    pub footnotes: usize,
}

/// The converted legal code: the hierarchy plus the footnote table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "kitaplar")]
    pub books: Vec<Book>,

    #[serde(rename = "dipnotlar")]
    pub footnotes: FootnoteTable,
}

impl Document {
    /// Create a document from its parts.
    #[must_use]
    pub fn new(books: Vec<Book>, footnotes: FootnoteTable) -> Self {
        Self { books, footnotes }
    }

    /// Iterate over every article in document order.
    pub fn articles(&self) -> impl Iterator<Item = &Article> {
        self.books
            .iter()
            .flat_map(|b| &b.parts)
            .flat_map(|p| &p.chapters)
            .flat_map(|c| &c.articles)
    }

    /// Count entities per level.
    #[must_use]
    pub fn stats(&self) -> DocumentStats {
        let parts = self.books.iter().map(|b| b.parts.len()).sum();
        let chapters = self
            .books
            .iter()
            .flat_map(|b| &b.parts)
            .map(|p| p.chapters.len())
            .sum();

        DocumentStats {
            books: self.books.len(),
            parts,
            chapters,
            articles: self.articles().count(),
            footnotes: self.footnotes.len(),
        }
    }
}
