//! Configuration constants and path validation for the converter.
//!
//! The converter targets one document with a fixed heading vocabulary, so
//! everything that identifies structure in the source lives here as a
//! constant.

use std::path::Path;

use crate::error::{ConvertError, Result};

/// Substring marking a Book heading block.
pub const BOOK_KEYWORD: &str = "KİTAP";

/// Substring marking a Part heading block.
pub const PART_KEYWORD: &str = "KISIM";

/// Substring marking a Chapter heading block.
pub const CHAPTER_KEYWORD: &str = "BÖLÜM";

/// Keyword that starts a numbered article line (`Madde 5 - ...`).
pub const ARTICLE_KEYWORD: &str = "Madde";

/// Block text after which the substantive content of the code ends.
pub const DOCUMENT_END_SENTINEL: &str =
    "4721 SAYILI KANUNA EK VE DEĞİŞİKLİK GETİREN MEVZUATIN YÜRÜRLÜĞE GİRİŞ TARİHİNİ GÖSTERİR LİSTE";

/// Class of the element whose children are the content blocks.
pub const CONTENT_CONTAINER_CLASS: &str = "WordSection1";

/// Tag of the content container element.
pub const CONTENT_CONTAINER_TAG: &str = "div";

/// Class of the footnote definition elements.
pub const FOOTNOTE_CLASS: &str = "MsoFootnoteText";

/// Attribute on a footnote's first child that carries its id (`_ftn12`).
pub const FOOTNOTE_ID_ATTRIBUTE: &str = "name";

/// Largest footnote id accepted into the footnote table.
///
/// The table is a dense array indexed by id, so a corrupt anchor name must
/// not be able to size it.
pub const MAX_FOOTNOTE_ID: usize = 100_000;

/// Title line of the rendered Markdown document.
pub const MARKDOWN_TITLE: &str = "Türk Medeni Kanunu";

/// Heading labels used in the Markdown output.
pub const BOOK_LABEL: &str = "Kitap";
pub const PART_LABEL: &str = "Kısım";
pub const CHAPTER_LABEL: &str = "Bölüm";
pub const ARTICLE_LABEL: &str = "Madde";

/// Default input document.
pub const DEFAULT_INPUT_PATH: &str = "kanun.htm";

/// Default JSON output file.
pub const DEFAULT_JSON_PATH: &str = "kanun.json";

/// Default Markdown output file.
pub const DEFAULT_MARKDOWN_PATH: &str = "kanun.md";

/// Encoding assumed when the input is neither UTF-8 nor declares a charset.
///
/// Word exports of Turkish documents are written in Windows-1254.
pub const FALLBACK_ENCODING: &str = "windows-1254";

/// Validate that the input document exists and is a file.
///
/// # Examples
/// ```
/// use kanun_converter::config::validate_input_path;
/// use std::path::Path;
///
/// assert!(validate_input_path(Path::new("does/not/exist.htm")).is_err());
/// ```
pub fn validate_input_path(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(ConvertError::InputNotFound(path.to_path_buf()))
    }
}

/// Validate that the parent directory of an output file exists.
///
/// A bare file name (no parent component) always passes, it is written to
/// the working directory.
pub fn validate_output_path(path: &Path) -> Result<()> {
    let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };

    if !parent.exists() {
        return Err(ConvertError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Output directory does not exist: {}", parent.display()),
        )));
    }
    if !parent.is_dir() {
        return Err(ConvertError::NotADirectory(parent.to_path_buf()));
    }

    Ok(())
}
