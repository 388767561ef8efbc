//! Note builder for fluent API

use super::model::Note;
use crate::types::{AuthorId, ContentId};
use chrono::{DateTime, Utc};

/// Builder for creating notes with fluent API
pub struct NoteBuilder {
    author_id: AuthorId,
    title: String,
    text: String,
    created_at: Option<DateTime<Utc>>,
}

impl NoteBuilder {
    /// Create a new builder for a note by the given author
    pub fn new(author_id: AuthorId) -> Self {
        Self {
            author_id,
            title: String::new(),
            text: String::new(),
            created_at: None,
        }
    }

    /// Set the title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the body text
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the creation time (defaults to now)
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Build the note. The id stays unassigned until the note is added.
    pub fn build(self) -> Note {
        Note {
            id: ContentId::UNASSIGNED,
            author_id: self.author_id,
            created_at: self.created_at.unwrap_or_else(Utc::now),
            title: self.title,
            text: self.text,
            is_deleted: false,
            comments: Vec::new(),
        }
    }
}
