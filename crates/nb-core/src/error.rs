//! Error types for note-board

use crate::types::{CommentId, ContentId};
use std::fmt;
use thiserror::Error;

/// What a failed lookup was searching for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// Lookup by content id
    Content(ContentId),
    /// Lookup by comment id, across all content
    Comment(CommentId),
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::Content(id) => write!(f, "content id {}", id),
            Lookup::Comment(id) => write!(f, "comment id {}", id),
        }
    }
}

/// Main error type for note-board
#[derive(Debug, Error)]
pub enum NoteBoardError {
    /// No stored content matched the lookup
    #[error("Content not found for {0}")]
    ContentNotFound(Lookup),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<NoteBoardError>,
    },
}

impl NoteBoardError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        NoteBoardError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Shorthand for a failed content id lookup
    pub fn content_not_found(id: ContentId) -> Self {
        NoteBoardError::ContentNotFound(Lookup::Content(id))
    }

    /// Shorthand for a failed comment id lookup
    pub fn comment_not_found(id: CommentId) -> Self {
        NoteBoardError::ContentNotFound(Lookup::Comment(id))
    }
}

/// Result type alias for note-board
pub type Result<T> = std::result::Result<T, NoteBoardError>;
