//! Output generation: JSON tree and Markdown document.

mod json;
mod markdown;

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::types::Document;

pub use json::render_json;
pub use markdown::render_markdown;

/// Write `content` to `path` atomically.
///
/// Writes to a hidden temp file next to the target, syncs it to disk and
/// renames it over the target, so a crash never leaves a half-written
/// output behind.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let temp_file = path.with_file_name(format!(".{file_name}.tmp"));

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&temp_file, path)?;
    Ok(())
}

/// Render the document as JSON and save it.
pub fn save_json(document: &Document, path: &Path) -> Result<()> {
    let content = render_json(document)?;
    write_atomic(path, &content)?;
    tracing::info!(path = %path.display(), bytes = content.len(), "Wrote JSON output");
    Ok(())
}

/// Render the document as Markdown and save it.
pub fn save_markdown(document: &Document, path: &Path) -> Result<()> {
    let content = render_markdown(document);
    write_atomic(path, &content)?;
    tracing::info!(path = %path.display(), bytes = content.len(), "Wrote Markdown output");
    Ok(())
}
