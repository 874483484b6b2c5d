//! Error types for file-backed sources.

use thiserror::Error;

use rsb_bonds::BondError;

/// A specialized Result type for file operations.
pub type FileResult<T> = Result<T, FileError>;

/// Errors raised while loading data files.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FileError {
    /// The file does not exist.
    #[error("File not found: {path}")]
    NotFound {
        /// Path that was looked up.
        path: String,
    },

    /// The file could not be read.
    #[error("I/O error reading {path}: {message}")]
    Io {
        /// Path being read.
        path: String,
        /// Underlying error.
        message: String,
    },

    /// A row could not be parsed.
    #[error("Parse error in {path} at line {line}: {message}")]
    Parse {
        /// Path being read.
        path: String,
        /// 1-based line number.
        line: u64,
        /// What was wrong with the row.
        message: String,
    },

    /// Bond engine error.
    #[error(transparent)]
    Bond(#[from] BondError),
}

impl FileError {
    /// Creates a parse error.
    #[must_use]
    pub fn parse(path: impl Into<String>, line: u64, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            line,
            message: message.into(),
        }
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Io {
            path: path.into(),
            message: message.into(),
        }
    }
}
