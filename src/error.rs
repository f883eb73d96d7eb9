//! Error types for Argand.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Argand operations.
pub type Result<T> = std::result::Result<T, ArgandError>;

/// Errors that can occur in Argand.
#[derive(Debug, Error)]
pub enum ArgandError {
    /// Failed to open a file.
    #[error("Failed to open file: {}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed point data in a series file.
    #[error("Parse error in {} at line {line}: {message}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// Failed to read CSV records.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ArgandError {
    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Create a Parse error.
    pub fn parse(path: PathBuf, line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            path,
            line,
            message: message.into(),
        }
    }
}
