//! State machine that rebuilds the Book → Part → Chapter → Article tree
//! from the flat stream of normalized blocks.

use regex::Regex;
use std::sync::LazyLock;

use super::classify::{classify_block, BlockKind};
use crate::config::{ARTICLE_KEYWORD, DOCUMENT_END_SENTINEL};
use crate::types::{Article, Book, Chapter, Part};

/// Numbered article line: keyword, number with optional `/X` suffix,
/// optional space, then the hyphen-led remainder.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ARTICLE_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^{} ([0-9]+(?:/\p{{Lu}})?) ?(-.*)$",
        regex::escape(ARTICLE_KEYWORD)
    ))
    .expect("valid regex")
});

/// Hierarchy level that owns a display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Book,
    Part,
    Chapter,
}

/// Single-slot deferred name assignment.
///
/// After a heading marker the next block is the heading's name. At most
/// one assignment can be pending, and it always targets the entity that
/// was opened last.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PendingName {
    #[default]
    Idle,
    AwaitingNameFor(Level),
}

/// Whether the caller should keep feeding blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockFlow {
    Continue,
    /// The end sentinel was seen, later blocks are ignored.
    Halt,
}

/// A line recognized as the start of a numbered article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleHeading {
    pub number: String,
    pub title: String,
}

/// Parse a numbered article line (`Madde 5/A - Title`).
///
/// The hyphen that separates number and title is dropped, as is the
/// whitespace after it.
///
/// # Examples
/// ```
/// use kanun_converter::hierarchy::parse_article_heading;
///
/// let heading = parse_article_heading("Madde 5 -Title text").unwrap();
/// assert_eq!(heading.number, "5");
/// assert_eq!(heading.title, "Title text");
/// assert!(parse_article_heading("Body text").is_none());
/// ```
pub fn parse_article_heading(text: &str) -> Option<ArticleHeading> {
    let caps = ARTICLE_HEADING.captures(text)?;
    let number = caps.get(1)?.as_str();
    let rest = caps.get(2)?.as_str();
    let title = rest.strip_prefix('-').unwrap_or(rest).trim_start();

    Some(ArticleHeading {
        number: number.to_string(),
        title: title.to_string(),
    })
}

/// Indices of the currently open entity at each level.
#[derive(Debug, Clone, Copy, Default)]
struct Cursor {
    book: Option<usize>,
    part: Option<usize>,
    chapter: Option<usize>,
    article: Option<usize>,
}

/// Parse context for the hierarchy state machine.
///
/// Feed normalized blocks in document order with [`push_block`], then
/// take the tree with [`finish`].
///
/// [`push_block`]: HierarchyBuilder::push_block
/// [`finish`]: HierarchyBuilder::finish
#[derive(Debug, Default)]
pub struct HierarchyBuilder {
    books: Vec<Book>,
    cursor: Cursor,
    pending: PendingName,
    halted: bool,
}

impl HierarchyBuilder {
    /// Create a builder with nothing open.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The pending name assignment, if any.
    #[must_use]
    pub fn pending(&self) -> PendingName {
        self.pending
    }

    /// Whether the end sentinel has been seen.
    #[must_use]
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Process one normalized block.
    pub fn push_block(&mut self, text: &str) -> BlockFlow {
        if self.halted {
            return BlockFlow::Halt;
        }

        if let PendingName::AwaitingNameFor(level) = std::mem::take(&mut self.pending) {
            self.assign_name(level, text);
            return BlockFlow::Continue;
        }

        if text == DOCUMENT_END_SENTINEL {
            tracing::debug!("Reached end of document content");
            self.close_chapter();
            self.halted = true;
            return BlockFlow::Halt;
        }

        match classify_block(text) {
            BlockKind::Book => self.open_book(),
            _ if self.cursor.book.is_none() => {
                tracing::debug!(block = %text, "Ignoring block before the first book");
            }
            BlockKind::Part => self.open_part(),
            _ if self.cursor.part.is_none() => {
                tracing::debug!(block = %text, "Ignoring block outside any part");
            }
            BlockKind::Chapter => self.open_chapter(),
            _ if self.cursor.chapter.is_none() => {
                tracing::debug!(block = %text, "Ignoring block outside any chapter");
            }
            BlockKind::Content => self.push_content(text),
        }

        BlockFlow::Continue
    }

    /// Close the open chapter and return the finished tree.
    #[must_use]
    pub fn finish(mut self) -> Vec<Book> {
        self.close_chapter();
        self.books
    }

    fn assign_name(&mut self, level: Level, name: &str) {
        let target = match level {
            Level::Book => self.book_mut().map(|b| &mut b.name),
            Level::Part => self.part_mut().map(|p| &mut p.name),
            Level::Chapter => self.chapter_mut().map(|c| &mut c.name),
        };
        if let Some(target) = target {
            *target = name.to_string();
        }
    }

    fn open_book(&mut self) {
        self.close_chapter();
        self.books.push(Book::default());
        self.cursor = Cursor {
            book: Some(self.books.len() - 1),
            ..Cursor::default()
        };
        self.pending = PendingName::AwaitingNameFor(Level::Book);
    }

    fn open_part(&mut self) {
        self.close_chapter();
        let Some(book) = self.book_mut() else {
            return;
        };
        book.parts.push(Part::default());
        let index = book.parts.len() - 1;
        self.cursor.part = Some(index);
        self.cursor.chapter = None;
        self.pending = PendingName::AwaitingNameFor(Level::Part);
    }

    fn open_chapter(&mut self) {
        self.close_chapter();
        let Some(part) = self.part_mut() else {
            return;
        };
        part.chapters.push(Chapter::default());
        let index = part.chapters.len() - 1;
        self.cursor.chapter = Some(index);
        self.pending = PendingName::AwaitingNameFor(Level::Chapter);
    }

    fn open_article(&mut self) {
        let Some(chapter) = self.chapter_mut() else {
            return;
        };
        chapter.articles.push(Article::default());
        let index = chapter.articles.len() - 1;
        self.cursor.article = Some(index);
    }

    /// Drop unnumbered articles from the open chapter and close its article.
    fn close_chapter(&mut self) {
        if let Some(chapter) = self.chapter_mut() {
            let before = chapter.articles.len();
            chapter.articles.retain(Article::is_numbered);
            let dropped = before - chapter.articles.len();
            if dropped > 0 {
                tracing::debug!(
                    chapter = %chapter.name,
                    dropped,
                    "Dropped articles without a number"
                );
            }
        }
        self.cursor.article = None;
    }

    fn push_content(&mut self, text: &str) {
        let is_separator = text.is_empty();
        let needs_article = match self.article_mut() {
            None => true,
            Some(article) => is_separator && article.is_numbered(),
        };
        if needs_article {
            self.open_article();
        }

        if is_separator {
            return;
        }

        let heading = parse_article_heading(text);

        // An article carries at most one numbered line.
        if heading.is_some() && self.article_mut().is_some_and(|a| a.is_numbered()) {
            tracing::debug!(block = %text, "Numbered line without separator, opening new article");
            self.open_article();
        }

        let Some(article) = self.article_mut() else {
            return;
        };
        match heading {
            Some(ArticleHeading { number, title }) => {
                article.number = number;
                article.lines.push(title);
            }
            None => article.lines.push(text.to_string()),
        }
    }

    fn book_mut(&mut self) -> Option<&mut Book> {
        self.books.get_mut(self.cursor.book?)
    }

    fn part_mut(&mut self) -> Option<&mut Part> {
        let index = self.cursor.part?;
        self.book_mut()?.parts.get_mut(index)
    }

    fn chapter_mut(&mut self) -> Option<&mut Chapter> {
        let index = self.cursor.chapter?;
        self.part_mut()?.chapters.get_mut(index)
    }

    fn article_mut(&mut self) -> Option<&mut Article> {
        let index = self.cursor.article?;
        self.chapter_mut()?.articles.get_mut(index)
    }
}

/// Build the tree from a sequence of normalized blocks.
///
/// Stops at the end sentinel.
pub fn build_hierarchy<I, S>(blocks: I) -> Vec<Book>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = HierarchyBuilder::new();
    for block in blocks {
        if builder.push_block(block.as_ref()) == BlockFlow::Halt {
            break;
        }
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PREAMBLE: [&str; 6] = [
        "BİRİNCİ KİTAP",
        "Kişiler Hukuku",
        "BİRİNCİ KISIM",
        "Gerçek Kişiler",
        "BİRİNCİ BÖLÜM",
        "Kişilik",
    ];

    fn build(extra: &[&str]) -> Vec<Book> {
        build_hierarchy(PREAMBLE.iter().chain(extra.iter()))
    }

    fn articles(books: &[Book]) -> Vec<&Article> {
        books
            .iter()
            .flat_map(|b| &b.parts)
            .flat_map(|p| &p.chapters)
            .flat_map(|c| &c.articles)
            .collect()
    }

    #[test]
    fn test_parse_article_heading_variants() {
        let h = parse_article_heading("Madde 5/A- Başlık").unwrap();
        assert_eq!(h.number, "5/A");
        assert_eq!(h.title, "Başlık");

        let h = parse_article_heading("Madde 12 - Title").unwrap();
        assert_eq!(h.number, "12");
        assert_eq!(h.title, "Title");

        let h = parse_article_heading("Madde 3-").unwrap();
        assert_eq!(h.title, "");

        assert!(parse_article_heading("Madde 5 Title").is_none());
        assert!(parse_article_heading("Madde A - Title").is_none());
        assert!(parse_article_heading("Madde 5/a - Title").is_none());
        assert!(parse_article_heading(" Madde 5 - Title").is_none());
        assert!(parse_article_heading("Bu Madde 5 - Title").is_none());
        assert!(parse_article_heading("Madde \u{663} - Title").is_none());
    }

    #[test]
    fn test_two_articles_separated_by_blank() {
        let books = build(&["Madde 5 -Title text", "", "Madde 6 -Other title"]);

        assert_eq!(books.len(), 1);
        assert_eq!(books[0].name, "Kişiler Hukuku");
        assert_eq!(books[0].parts[0].name, "Gerçek Kişiler");
        assert_eq!(books[0].parts[0].chapters[0].name, "Kişilik");
        assert_eq!(
            books[0].parts[0].chapters[0].articles,
            vec![
                Article::new("5", ["Title text"]),
                Article::new("6", ["Other title"]),
            ]
        );
    }

    #[test]
    fn test_book_name_from_following_block() {
        let books = build_hierarchy([
            "... KİTAP ...",
            "Book Name",
            "... KISIM ...",
            "Part Name",
            "... BÖLÜM ...",
            "Chapter Name",
            "Madde 5 -Title text",
            "",
            "Madde 6 -Other title",
        ]);

        assert_eq!(books.len(), 1);
        assert_eq!(books[0].name, "Book Name");
        let all = articles(&books);
        assert_eq!(all.len(), 2);
        assert_eq!((all[0].number.as_str(), all[0].title()), ("5", Some("Title text")));
        assert_eq!((all[1].number.as_str(), all[1].title()), ("6", Some("Other title")));
    }

    #[test]
    fn test_body_lines_accumulate_until_separator() {
        let books = build(&[
            "Madde 1 - Hukukun uygulanması",
            "Kanun, sözüyle ve özüyle değindiği bütün konularda uygulanır.",
            "Kanunda uygulanabilir bir hüküm bulunmayan hallerde hâkim karar verir.",
            "",
            "Madde 2 - Dürüst davranma",
            "Herkes, haklarını kullanırken dürüstlük kurallarına uymak zorundadır.",
        ]);

        let all = articles(&books);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].lines.len(), 3);
        assert_eq!(all[0].lines[0], "Hukukun uygulanması");
        assert_eq!(all[1].number, "2");
        assert_eq!(all[1].lines.len(), 2);
        assert!(all.iter().all(|a| a.clauses.is_empty()));
    }

    #[test]
    fn test_leading_blanks_do_not_split_unnumbered_article() {
        let books = build(&["", "", "Kenar başlığı", "", "Madde 7 - Title", "Body"]);

        let all = articles(&books);
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].number, "7");
        assert_eq!(all[0].lines, vec!["Kenar başlığı", "Title", "Body"]);
    }

    #[test]
    fn test_trailing_empty_article_is_dropped() {
        let books = build(&["Madde 1 - A", "", "", "Stray line"]);

        let all = articles(&books);
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].number, "1");
    }

    #[test]
    fn test_unnumbered_article_dropped_when_chapter_closes() {
        let books = build(&[
            "Madde 1 - A",
            "",
            "Orphan text",
            "İKİNCİ BÖLÜM",
            "Hak ehliyeti",
            "Madde 2 - B",
        ]);

        let chapters = &books[0].parts[0].chapters;
        assert_eq!(chapters.len(), 2);
        assert_eq!(chapters[0].articles, vec![Article::new("1", ["A"])]);
        assert_eq!(chapters[1].name, "Hak ehliyeti");
        assert_eq!(chapters[1].articles, vec![Article::new("2", ["B"])]);
    }

    #[test]
    fn test_numbered_line_without_separator_opens_new_article() {
        let books = build(&["Madde 1 - A", "Madde 2 - B"]);

        let all = articles(&books);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].number, "1");
        assert_eq!(all[1].number, "2");
    }

    #[test]
    fn test_orphan_markers_are_ignored() {
        let books = build_hierarchy([
            "İKİNCİ KISIM",
            "ÜÇÜNCÜ BÖLÜM",
            "Madde 1 - Before any book",
            "BİRİNCİ KİTAP",
            "Name",
            "BİRİNCİ BÖLÜM",
            "Madde 2 - Before any part",
        ]);

        assert_eq!(books.len(), 1);
        assert_eq!(books[0].name, "Name");
        assert!(books[0].parts.is_empty());
    }

    #[test]
    fn test_content_before_chapter_is_ignored() {
        let books = build_hierarchy([
            "BİRİNCİ KİTAP",
            "Book",
            "BİRİNCİ KISIM",
            "Part",
            "Madde 1 - No chapter yet",
        ]);

        assert_eq!(books[0].parts[0].name, "Part");
        assert!(books[0].parts[0].chapters.is_empty());
    }

    #[test]
    fn test_name_block_is_never_structural() {
        let books = build_hierarchy(["BİRİNCİ KİTAP", "İKİNCİ KISIM HAKKINDA", "Madde 1 - x"]);

        assert_eq!(books.len(), 1);
        assert_eq!(books[0].name, "İKİNCİ KISIM HAKKINDA");
        assert!(books[0].parts.is_empty());
    }

    #[test]
    fn test_marker_at_end_leaves_empty_name() {
        let books = build(&["İKİNCİ BÖLÜM"]);

        let chapters = &books[0].parts[0].chapters;
        assert_eq!(chapters.len(), 2);
        assert_eq!(chapters[1].name, "");
        assert!(chapters[1].articles.is_empty());
    }

    #[test]
    fn test_sentinel_halts_processing() {
        let books = build(&[
            "Madde 1 - A",
            DOCUMENT_END_SENTINEL,
            "İKİNCİ KİTAP",
            "Ignored",
            "Madde 2 - B",
        ]);

        assert_eq!(books.len(), 1);
        assert_eq!(articles(&books).len(), 1);
    }

    #[test]
    fn test_sentinel_as_name_is_consumed_as_name() {
        let books = build_hierarchy(["BİRİNCİ KİTAP", DOCUMENT_END_SENTINEL, "İKİNCİ KİTAP", "Two"]);
        assert_eq!(books.len(), 2);
        assert_eq!(books[0].name, DOCUMENT_END_SENTINEL);
    }

    #[test]
    fn test_push_after_halt_is_noop() {
        let mut builder = HierarchyBuilder::new();
        assert_eq!(builder.push_block(DOCUMENT_END_SENTINEL), BlockFlow::Halt);
        assert!(builder.is_halted());
        assert_eq!(builder.push_block("BİRİNCİ KİTAP"), BlockFlow::Halt);
        assert!(builder.finish().is_empty());
    }

    #[test]
    fn test_pending_name_single_slot() {
        let mut builder = HierarchyBuilder::new();
        assert_eq!(builder.pending(), PendingName::Idle);

        builder.push_block("BİRİNCİ KİTAP");
        assert_eq!(builder.pending(), PendingName::AwaitingNameFor(Level::Book));

        builder.push_block("Kişiler Hukuku");
        assert_eq!(builder.pending(), PendingName::Idle);

        builder.push_block("BİRİNCİ KISIM");
        assert_eq!(builder.pending(), PendingName::AwaitingNameFor(Level::Part));
    }

    #[test]
    fn test_new_book_closes_open_part() {
        let books = build(&[
            "Madde 1 - A",
            "İKİNCİ KİTAP",
            "Aile Hukuku",
            "Madde 2 - Belongs nowhere",
            "BİRİNCİ KISIM",
            "Evlilik",
        ]);

        assert_eq!(books.len(), 2);
        assert_eq!(books[1].name, "Aile Hukuku");
        assert_eq!(books[1].parts.len(), 1);
        assert!(books[1].parts[0].chapters.is_empty());
        assert_eq!(articles(&books).len(), 1);
    }

    #[test]
    fn test_every_article_is_numbered() {
        let books = build(&[
            "", "x", "", "Madde 1 - A", "", "", "y", "BİRİNCİ BÖLÜM", "c", "", "z", "", "Madde 2 - B",
            "", "",
        ]);
        let all = articles(&books);
        assert_eq!(all.len(), 2);
        assert!(all.iter().all(|a| a.is_numbered()));
    }
}
