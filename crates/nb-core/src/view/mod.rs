//! Presentation views of the repository
//!
//! [`ContentView`] is the snapshot produced by
//! [`ContentRepository::list_active`](crate::content::ContentRepository::list_active).
//! Renderers turn a list of views into text or JSON.
//!
//! # Example
//!
//! ```ignore
//! use nb_core::view::RenderManager;
//!
//! let manager = RenderManager::new();
//! let text = manager.render(&repo.list_active(), "text")?;
//! ```

mod json;
mod renderer;
mod text;

pub use json::JsonRenderer;
pub use renderer::{RenderManager, Renderer};
pub use text::TextRenderer;

use crate::content::Content;
use crate::types::{AuthorId, ContentId};
use serde::{Deserialize, Serialize};

/// Listing entry for one active content item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentView {
    pub id: ContentId,
    pub title: String,
    pub text: String,
    /// Non-deleted comments, in insertion order
    pub comments: Vec<CommentView>,
}

/// Listing entry for one active comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentView {
    pub author_id: AuthorId,
    pub text: String,
}

impl ContentView {
    /// Build a view, dropping soft-deleted comments
    pub fn from_content<T: Content>(content: &T) -> Self {
        Self {
            id: content.id(),
            title: content.title().to_string(),
            text: content.text().to_string(),
            comments: content
                .active_comments()
                .into_iter()
                .map(|c| CommentView {
                    author_id: c.author_id,
                    text: c.text.clone(),
                })
                .collect(),
        }
    }
}
