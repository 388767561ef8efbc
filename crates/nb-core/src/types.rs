//! Core type definitions for note-board

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a stored content item
///
/// Assigned by the repository, sequentially from 1. Content that has not been
/// added yet carries [`ContentId::UNASSIGNED`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(pub u64);

impl ContentId {
    /// Placeholder id for content not yet stored
    pub const UNASSIGNED: ContentId = ContentId(0);
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a comment, unique across all content in a repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(pub u64);

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of an author. Recorded only, never checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(pub u64);

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic id source; hands out 1, 2, 3, ...
#[derive(Debug, Clone)]
pub(crate) struct Sequence {
    next: u64,
}

impl Sequence {
    pub(crate) fn new() -> Self {
        Self { next: 1 }
    }

    pub(crate) fn advance(&mut self) -> u64 {
        let value = self.next;
        self.next += 1;
        value
    }
}
