//! Markdown rendering of the converted legal code.

use crate::config::{
    ARTICLE_LABEL, BOOK_LABEL, CHAPTER_LABEL, MARKDOWN_TITLE, PART_LABEL,
};
use crate::types::{Article, Document, FootnoteTable};

/// Indentation of continuation paragraphs inside a definition block.
const CONTINUATION_INDENT: &str = "    ";

/// Render the title line, the heading tree, the articles and the
/// footnote definitions, joined by newlines.
pub fn render_markdown(document: &Document) -> String {
    let mut out: Vec<String> = vec![format!("# {MARKDOWN_TITLE}")];

    for (b, book) in document.books.iter().enumerate() {
        out.push(format!("## {}. {BOOK_LABEL}: {}", b + 1, book.name));

        for (p, part) in book.parts.iter().enumerate() {
            out.push(format!("### {}. {PART_LABEL}: {}", p + 1, part.name));

            for (c, chapter) in part.chapters.iter().enumerate() {
                out.push(format!("#### {}. {CHAPTER_LABEL}: {}", c + 1, chapter.name));

                for article in &chapter.articles {
                    render_article(article, &mut out);
                }
            }
        }
    }

    render_footnotes(&document.footnotes, &mut out);

    out.join("\n")
}

/// Heading, bold title line and definition block of one article.
///
/// The second line opens the definition; further lines follow as one
/// indented continuation, separated by blank lines.
fn render_article(article: &Article, out: &mut Vec<String>) {
    let number = &article.number;
    out.push(format!("##### {ARTICLE_LABEL} {number}"));
    out.push(format!("**{number} - {}**", article.title().unwrap_or_default()));

    let Some((first, rest)) = article.body().split_first() else {
        return;
    };
    out.push(format!(": {first}"));

    if !rest.is_empty() {
        out.push(String::new());
        out.push(
            rest.iter()
                .map(|line| format!("{CONTINUATION_INDENT}{line}"))
                .collect::<Vec<_>>()
                .join("\n\n"),
        );
    }
}

/// One `[^n]: text` definition per populated footnote, each followed by
/// a blank line.
fn render_footnotes(footnotes: &FootnoteTable, out: &mut Vec<String>) {
    for (id, text) in footnotes.iter() {
        out.push(format!("[^{id}]: {text}"));
        out.push(String::new());
    }
}
