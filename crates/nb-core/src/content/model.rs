//! Content and comment data models

use crate::types::{AuthorId, CommentId, ContentId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A comment attached to a content item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Author of the comment
    pub author_id: AuthorId,
    /// Unique comment identifier, assigned by the repository
    pub id: CommentId,
    /// Comment text
    pub text: String,
    /// Soft-delete flag
    #[serde(default)]
    pub is_deleted: bool,
}

impl Comment {
    /// Create an active comment
    pub fn new(author_id: AuthorId, id: CommentId, text: impl Into<String>) -> Self {
        Self {
            author_id,
            id,
            text: text.into(),
            is_deleted: false,
        }
    }

    /// Copy with replaced text
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..self.clone()
        }
    }

    /// Copy with the given deletion flag
    pub fn with_deleted(&self, is_deleted: bool) -> Self {
        Self {
            is_deleted,
            ..self.clone()
        }
    }
}

/// Capabilities shared by every kind of stored content.
///
/// Transforms never mutate `self`; they return a modified copy which the
/// repository writes back into its slot.
pub trait Content: Clone {
    /// Repository-assigned id
    fn id(&self) -> ContentId;

    /// Author of the content
    fn author_id(&self) -> AuthorId;

    /// Creation timestamp
    fn created_at(&self) -> DateTime<Utc>;

    fn title(&self) -> &str;

    fn text(&self) -> &str;

    fn is_deleted(&self) -> bool;

    /// Comments in insertion order
    fn comments(&self) -> &[Comment];

    /// Copy carrying a new id
    fn with_id(&self, id: ContentId) -> Self;

    /// Copy with the comment list replaced
    fn with_comments(&self, comments: Vec<Comment>) -> Self;

    /// Copy with title and text replaced
    fn with_details(&self, title: &str, text: &str) -> Self;

    /// Copy with the deletion flag set
    fn with_deleted(&self, is_deleted: bool) -> Self;

    /// Position of a comment in [`Content::comments`]
    fn comment_position(&self, id: CommentId) -> Option<usize> {
        self.comments().iter().position(|c| c.id == id)
    }

    /// Comments that are not soft-deleted, in insertion order
    fn active_comments(&self) -> Vec<&Comment> {
        self.comments().iter().filter(|c| !c.is_deleted).collect()
    }
}

/// A note: the only content variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Repository-assigned id, [`ContentId::UNASSIGNED`] until added
    #[serde(default)]
    pub id: ContentId,
    pub author_id: AuthorId,
    pub created_at: DateTime<Utc>,
    pub title: String,
    pub text: String,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Content for Note {
    fn id(&self) -> ContentId {
        self.id
    }

    fn author_id(&self) -> AuthorId {
        self.author_id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    fn comments(&self) -> &[Comment] {
        &self.comments
    }

    fn with_id(&self, id: ContentId) -> Self {
        Self { id, ..self.clone() }
    }

    fn with_comments(&self, comments: Vec<Comment>) -> Self {
        Self {
            comments,
            ..self.clone()
        }
    }

    fn with_details(&self, title: &str, text: &str) -> Self {
        Self {
            title: title.to_string(),
            text: text.to_string(),
            ..self.clone()
        }
    }

    fn with_deleted(&self, is_deleted: bool) -> Self {
        Self {
            is_deleted,
            ..self.clone()
        }
    }
}
