//! Error types for track formatting.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for fallible formatter operations.
pub type Result<T> = std::result::Result<T, FormatError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Filename stem without an "artist - title" separator
    #[error("Malformed filename, expected \"artist - title\": {0}")]
    MalformedFilename(String),

    #[error("Unsupported audio format: {0}")]
    UnsupportedFormat(String),

    /// Path has no file stem or no extension
    #[error("Missing file name: {}", .0.display())]
    MissingFileName(PathBuf),
}
