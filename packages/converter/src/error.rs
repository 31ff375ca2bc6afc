//! Error types for the converter.
//!
//! Only conditions that make the whole run impossible are errors. Malformed
//! or orphaned content inside the document is dropped by the parser and
//! never surfaces here.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the converter library.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Input file does not exist.
    #[error("Input file does not exist: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Output path points into something that is not a directory.
    #[error("Output directory is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Missing required HTML element.
    #[error("Missing required HTML element: {element} in {context}")]
    MissingElement { element: String, context: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for converter operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
