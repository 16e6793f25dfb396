//! Error types for the stylesheet engine.

use std::path::PathBuf;

use crate::properties::ValueError;

/// Result type alias for style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while lexing, parsing or validating a stylesheet.
///
/// Every error is terminal for the call that produced it: the first fault
/// aborts the whole operation and no partial result is returned.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The text could not be split into tokens (unterminated comment).
    #[error("{line}:{column}: {message}")]
    Lex {
        message: String,
        line: u32,
        column: u32,
    },

    /// A grammar violation.
    #[error("{line}:{column}: {message}")]
    Parse {
        message: String,
        line: u32,
        column: u32,
    },

    /// A declaration value rejected by the property registry.
    #[error("{line}:{column}: {source}")]
    Validation {
        #[source]
        source: ValueError,
        line: u32,
        column: u32,
    },

    /// File I/O error.
    #[error("Failed to read stylesheet '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a lex error.
    pub fn lex(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self::Lex {
            message: message.into(),
            line,
            column,
        }
    }

    /// Create a parse error.
    pub fn parse(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self::Parse {
            message: message.into(),
            line,
            column,
        }
    }

    /// Create a validation error.
    pub fn validation(source: ValueError, line: u32, column: u32) -> Self {
        Self::Validation {
            source,
            line,
            column,
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// The 1-based `(line, column)` of the fault, if it came from source text.
    pub fn position(&self) -> Option<(u32, u32)> {
        match self {
            Self::Lex { line, column, .. }
            | Self::Parse { line, column, .. }
            | Self::Validation { line, column, .. } => Some((*line, *column)),
            Self::Io { .. } => None,
        }
    }
}
