//! Error types for blogsmith-core

use std::path::Path;

use thiserror::Error;

/// Result type alias for Blogsmith operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur across the Blogsmith engine
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// I/O failure with the path that caused it
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Underlying I/O error
        source: std::io::Error,
        /// Path being accessed when the error occurred
        path: String,
    },

    /// A document's front matter or body failed to parse
    #[error("Parse error: {0}")]
    Parse(String),

    /// Requested slug has no corresponding document in the content store
    #[error("Document not found: {0}")]
    NotFound(String),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create an I/O error annotated with the offending path.
    pub fn io_with_path(source: std::io::Error, path: &Path) -> Self {
        Self::Io {
            source,
            path: path.display().to_string(),
        }
    }

    /// Create a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Create a not-found error for the given slug.
    pub fn not_found(slug: impl Into<String>) -> Self {
        Self::NotFound(slug.into())
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Returns `true` if this error represents a missing document.
    ///
    /// Callers map this to a "page not found" response rather than a
    /// failure page.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

// ============================================================================
// Tests
// ============================================================================
