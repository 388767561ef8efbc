//! In-memory content repository
//!
//! Stored items are never mutated in place. Every operation builds a modified
//! copy, writes it back into the item's slot and returns the copy, so callers
//! always hold independent snapshots.

use super::model::{Comment, Content, Note};
use crate::error::{NoteBoardError, Result};
use crate::types::{AuthorId, CommentId, ContentId, Sequence};
use crate::view::ContentView;
use tracing::debug;

/// Ordered store of content items with soft-delete and comment support
#[derive(Debug, Clone)]
pub struct ContentRepository<T: Content = Note> {
    /// Items in insertion order; slots are replaced, never removed
    items: Vec<T>,
    /// Source of content ids
    content_ids: Sequence,
    /// Source of comment ids, shared by all items
    comment_ids: Sequence,
}

impl<T: Content> ContentRepository<T> {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            content_ids: Sequence::new(),
            comment_ids: Sequence::new(),
        }
    }

    /// Store a content item under the next content id.
    ///
    /// Any id already present on `content` is ignored.
    pub fn add(&mut self, content: T) -> T {
        let id = ContentId(self.content_ids.advance());
        let stored = content.with_id(id);
        self.items.push(stored.clone());
        debug!("Added content {}", id);
        stored
    }

    /// Attach a new comment to the content with `content_id`
    pub fn create_comment(
        &mut self,
        content_id: ContentId,
        author_id: AuthorId,
        text: impl Into<String>,
    ) -> Result<Comment> {
        let index = self.position(content_id)?;
        let comment = Comment::new(author_id, CommentId(self.comment_ids.advance()), text);

        let content = &self.items[index];
        let mut comments = content.comments().to_vec();
        comments.push(comment.clone());
        let updated = content.with_comments(comments);
        self.items[index] = updated;

        debug!("Added comment {} to content {}", comment.id, content_id);
        Ok(comment)
    }

    /// Soft-delete a content item. Deleting twice leaves it deleted.
    pub fn delete(&mut self, content_id: ContentId) -> Result<T> {
        self.replace(content_id, |content| content.with_deleted(true))
    }

    /// Clear the soft-delete flag of a content item
    pub fn restore(&mut self, content_id: ContentId) -> Result<T> {
        self.replace(content_id, |content| content.with_deleted(false))
    }

    /// Replace title and text, keeping everything else (including the
    /// deletion flag)
    pub fn edit(&mut self, content_id: ContentId, title: &str, text: &str) -> Result<T> {
        self.replace(content_id, |content| content.with_details(title, text))
    }

    /// Soft-delete a comment on whichever content owns it
    pub fn delete_comment(&mut self, comment_id: CommentId) -> Result<T> {
        self.replace_comment(comment_id, |comment| comment.with_deleted(true))
    }

    /// Clear the soft-delete flag of a comment
    pub fn restore_comment(&mut self, comment_id: CommentId) -> Result<T> {
        self.replace_comment(comment_id, |comment| comment.with_deleted(false))
    }

    /// Replace a comment's text. The deletion flag is left as is.
    pub fn edit_comment(&mut self, comment_id: CommentId, text: &str) -> Result<T> {
        self.replace_comment(comment_id, |comment| comment.with_text(text))
    }

    /// Views of every non-deleted item with its non-deleted comments
    pub fn list_active(&self) -> Vec<ContentView> {
        self.items
            .iter()
            .filter(|content| !content.is_deleted())
            .map(ContentView::from_content)
            .collect()
    }

    /// Get a content item by id, deleted or not
    pub fn get(&self, content_id: ContentId) -> Option<&T> {
        self.items.iter().find(|content| content.id() == content_id)
    }

    /// Find a comment together with the content that owns it
    pub fn find_comment(&self, comment_id: CommentId) -> Option<(&T, &Comment)> {
        let (index, pos) = self.locate_comment(comment_id)?;
        let content = &self.items[index];
        Some((content, &content.comments()[pos]))
    }

    /// All stored items in insertion order, including deleted ones
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Number of stored items, including deleted ones
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, content_id: ContentId) -> Result<usize> {
        self.items
            .iter()
            .position(|content| content.id() == content_id)
            .ok_or_else(|| NoteBoardError::content_not_found(content_id))
    }

    /// Slot of the owning content and index of the comment within it
    fn locate_comment(&self, comment_id: CommentId) -> Option<(usize, usize)> {
        self.items.iter().enumerate().find_map(|(index, content)| {
            content
                .comment_position(comment_id)
                .map(|pos| (index, pos))
        })
    }

    fn replace(&mut self, content_id: ContentId, update: impl FnOnce(&T) -> T) -> Result<T> {
        let index = self.position(content_id)?;
        let updated = update(&self.items[index]);
        self.items[index] = updated.clone();
        debug!("Updated content {}", content_id);
        Ok(updated)
    }

    fn replace_comment(
        &mut self,
        comment_id: CommentId,
        update: impl FnOnce(&Comment) -> Comment,
    ) -> Result<T> {
        let (index, pos) = self
            .locate_comment(comment_id)
            .ok_or_else(|| NoteBoardError::comment_not_found(comment_id))?;

        let content = &self.items[index];
        let mut comments = content.comments().to_vec();
        comments[pos] = update(&comments[pos]);
        let updated = content.with_comments(comments);
        self.items[index] = updated.clone();

        debug!("Updated comment {} on content {}", comment_id, updated.id());
        Ok(updated)
    }
}

impl<T: Content> Default for ContentRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::NoteBuilder;
    use crate::error::Lookup;
    use crate::view::CommentView;
    use pretty_assertions::assert_eq;

    fn first_note() -> Note {
        NoteBuilder::new(AuthorId(1))
            .title("Hello, everyone!")
            .text("It's such a good day!")
            .build()
    }

    fn second_note() -> Note {
        NoteBuilder::new(AuthorId(1))
            .title("Good morning!")
            .text("It's such a rainy day!")
            .build()
    }

    fn assert_not_found<T: std::fmt::Debug>(result: Result<T>, expected: Lookup) {
        match result {
            Err(NoteBoardError::ContentNotFound(lookup)) => assert_eq!(lookup, expected),
            other => panic!("expected ContentNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let mut repo = ContentRepository::new();
        let a = repo.add(first_note());
        let b = repo.add(second_note().with_id(ContentId(42)));
        let c = repo.add(first_note());

        assert_eq!(a.id, ContentId(1));
        assert_eq!(b.id, ContentId(2));
        assert_eq!(c.id, ContentId(3));
        assert_eq!(repo.len(), 3);
        assert_eq!(repo.get(ContentId(2)), Some(&b));
    }

    #[test]
    fn test_add_returns_stored_copy() {
        let mut repo = ContentRepository::new();
        let note = first_note();
        let stored = repo.add(note.clone());

        assert_eq!(stored, note.with_id(ContentId(1)));
    }

    #[test]
    fn test_comment_ids_are_global() {
        let mut repo = ContentRepository::new();
        let a = repo.add(first_note());
        let b = repo.add(second_note());

        let c1 = repo.create_comment(a.id, AuthorId(2), "same to you!").unwrap();
        let c2 = repo.create_comment(b.id, AuthorId(15), "Morning!").unwrap();
        let c3 = repo.create_comment(a.id, AuthorId(3), "indeed").unwrap();

        assert_eq!(c1.id, CommentId(1));
        assert_eq!(c2.id, CommentId(2));
        assert_eq!(c3.id, CommentId(3));

        let a_comments: Vec<_> = repo.get(a.id).unwrap().comments.iter().map(|c| c.id).collect();
        assert_eq!(a_comments, vec![CommentId(1), CommentId(3)]);
    }

    #[test]
    fn test_create_comment_missing_content() {
        let mut repo = ContentRepository::new();
        repo.add(first_note());

        assert_not_found(
            repo.create_comment(ContentId(15), AuthorId(2), "same to you!"),
            Lookup::Content(ContentId(15)),
        );

        // A failed attempt does not consume a comment id
        let comment = repo.create_comment(ContentId(1), AuthorId(2), "hi").unwrap();
        assert_eq!(comment.id, CommentId(1));
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut repo = ContentRepository::new();
        let added = repo.add(first_note());

        let deleted = repo.delete(added.id).unwrap();
        assert_eq!(deleted, added.with_deleted(true));

        let again = repo.delete(added.id).unwrap();
        assert!(again.is_deleted);
        assert_eq!(again, deleted);
    }

    #[test]
    fn test_delete_missing_content() {
        let mut repo = ContentRepository::new();
        repo.add(first_note());
        let before = repo.list_active();

        assert_not_found(repo.delete(ContentId(12)), Lookup::Content(ContentId(12)));
        assert_eq!(repo.list_active(), before);
    }

    #[test]
    fn test_restore_reverses_delete() {
        let mut repo = ContentRepository::new();
        let added = repo.add(first_note());

        repo.delete(added.id).unwrap();
        assert!(repo.list_active().is_empty());

        let restored = repo.restore(added.id).unwrap();
        assert_eq!(restored, added);
        assert_eq!(repo.list_active().len(), 1);

        assert_not_found(repo.restore(ContentId(9)), Lookup::Content(ContentId(9)));
    }

    #[test]
    fn test_edit_preserves_other_fields() {
        let mut repo = ContentRepository::new();
        let added = repo.add(first_note());
        repo.create_comment(added.id, AuthorId(2), "same to you!").unwrap();
        repo.delete(added.id).unwrap();

        let edited = repo
            .edit(added.id, "Good afternoon", "It's such a rainy day!")
            .unwrap();

        assert_eq!(edited.title, "Good afternoon");
        assert_eq!(edited.text, "It's such a rainy day!");
        assert_eq!(edited.id, added.id);
        assert_eq!(edited.author_id, added.author_id);
        assert_eq!(edited.created_at, added.created_at);
        assert_eq!(edited.comments.len(), 1);
        assert!(edited.is_deleted);
    }

    #[test]
    fn test_edit_missing_content() {
        let mut repo = ContentRepository::new();
        let added = repo.add(first_note());

        assert_not_found(
            repo.edit(ContentId(3), "x", "y"),
            Lookup::Content(ContentId(3)),
        );
        assert_eq!(repo.get(added.id), Some(&added));
    }

    #[test]
    fn test_delete_comment_marks_only_that_comment() {
        let mut repo = ContentRepository::new();
        let added = repo.add(first_note());
        let comment = repo.create_comment(added.id, AuthorId(15), "Morning!").unwrap();

        let result = repo.delete_comment(comment.id).unwrap();

        let expected = added.with_comments(vec![Comment {
            author_id: AuthorId(15),
            id: CommentId(1),
            text: "Morning!".to_string(),
            is_deleted: true,
        }]);
        assert_eq!(result, expected);
    }

    #[test]
    fn test_comment_operations_find_owning_content() {
        let mut repo = ContentRepository::new();
        let a = repo.add(first_note());
        let b = repo.add(second_note());
        repo.create_comment(a.id, AuthorId(2), "same to you!").unwrap();
        let target = repo.create_comment(b.id, AuthorId(15), "Morning!").unwrap();

        let updated = repo.delete_comment(target.id).unwrap();
        assert_eq!(updated.id, b.id);
        assert!(updated.comments[0].is_deleted);
        assert!(!repo.get(a.id).unwrap().comments[0].is_deleted);

        let updated = repo.edit_comment(target.id, "Evening!").unwrap();
        assert_eq!(updated.id, b.id);
        assert_eq!(updated.comments[0].text, "Evening!");
        assert!(updated.comments[0].is_deleted);
        assert_eq!(repo.get(a.id).unwrap().comments[0].text, "same to you!");

        let updated = repo.restore_comment(target.id).unwrap();
        assert!(!updated.comments[0].is_deleted);
        assert_eq!(updated.comments[0].text, "Evening!");
    }

    #[test]
    fn test_comment_operations_missing_comment() {
        let mut repo: ContentRepository = ContentRepository::new();
        assert_not_found(repo.delete_comment(CommentId(1)), Lookup::Comment(CommentId(1)));

        let added = repo.add(first_note());
        repo.create_comment(added.id, AuthorId(2), "same to you!").unwrap();
        let before = repo.list_active();

        assert_not_found(repo.delete_comment(CommentId(7)), Lookup::Comment(CommentId(7)));
        assert_not_found(repo.restore_comment(CommentId(7)), Lookup::Comment(CommentId(7)));
        assert_not_found(
            repo.edit_comment(CommentId(7), "nope"),
            Lookup::Comment(CommentId(7)),
        );
        assert_eq!(repo.list_active(), before);
    }

    #[test]
    fn test_list_active_hides_deleted_comments_until_restored() {
        let mut repo = ContentRepository::new();
        let added = repo.add(first_note());
        let comment = repo.create_comment(added.id, AuthorId(2), "same to you!").unwrap();

        repo.delete_comment(comment.id).unwrap();
        let listing = repo.list_active();
        assert_eq!(listing.len(), 1);
        assert!(listing[0].comments.is_empty());

        repo.restore_comment(comment.id).unwrap();
        assert_eq!(
            repo.list_active()[0].comments,
            vec![CommentView {
                author_id: AuthorId(2),
                text: "same to you!".to_string(),
            }]
        );
    }

    #[test]
    fn test_list_active_skips_deleted_content_with_active_comments() {
        let mut repo = ContentRepository::new();
        let a = repo.add(first_note());
        let b = repo.add(second_note());
        repo.create_comment(a.id, AuthorId(2), "same to you!").unwrap();

        repo.delete(a.id).unwrap();

        let listing = repo.list_active();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].id, b.id);
        assert_eq!(repo.len(), 2);
        assert_eq!(repo.iter().filter(|n| n.is_deleted).count(), 1);
    }

    #[test]
    fn test_find_comment() {
        let mut repo = ContentRepository::new();
        repo.add(first_note());
        let b = repo.add(second_note());
        let comment = repo.create_comment(b.id, AuthorId(15), "Morning!").unwrap();

        let (owner, found) = repo.find_comment(comment.id).unwrap();
        assert_eq!(owner.id, b.id);
        assert_eq!(found, &comment);
        assert!(repo.find_comment(CommentId(99)).is_none());
    }

    #[test]
    fn test_greeting_scenario() {
        let mut repo = ContentRepository::new();
        let note = repo.add(first_note());
        assert_eq!(note.id, ContentId(1));

        let comment = repo.create_comment(note.id, AuthorId(2), "same to you!").unwrap();
        assert_eq!(comment.id, CommentId(1));

        let listing = repo.list_active();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].id, ContentId(1));
        assert_eq!(listing[0].comments[0].text, "same to you!");
        assert_eq!(listing[0].comments[0].author_id, AuthorId(2));

        repo.delete(note.id).unwrap();
        assert!(repo.list_active().is_empty());

        // Editing does not depend on the deletion flag
        let edited = repo.edit(note.id, "Good afternoon", "still here").unwrap();
        assert!(edited.is_deleted);
        assert!(repo.list_active().is_empty());
    }

    #[test]
    fn test_unknown_ids_change_nothing() {
        let mut repo = ContentRepository::new();
        let note = repo.add(first_note());
        repo.create_comment(note.id, AuthorId(2), "same to you!").unwrap();
        let before = repo.list_active();

        assert!(repo.create_comment(ContentId(50), AuthorId(1), "x").is_err());
        assert!(repo.delete(ContentId(50)).is_err());
        assert!(repo.restore(ContentId(50)).is_err());
        assert!(repo.edit(ContentId(50), "x", "y").is_err());
        assert!(repo.delete_comment(CommentId(50)).is_err());
        assert!(repo.restore_comment(CommentId(50)).is_err());
        assert!(repo.edit_comment(CommentId(50), "x").is_err());

        assert_eq!(repo.list_active(), before);
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_returned_values_are_snapshots() {
        let mut repo = ContentRepository::new();
        let added = repo.add(first_note());
        let before_edit = repo.get(added.id).cloned().unwrap();

        repo.edit(added.id, "new", "body").unwrap();

        assert_eq!(before_edit.title, "Hello, everyone!");
        assert_eq!(added.title, "Hello, everyone!");
        assert_eq!(repo.get(added.id).unwrap().title, "new");
    }
}
