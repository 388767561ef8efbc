//! Plain text listing

use super::renderer::Renderer;
use super::ContentView;
use crate::error::Result;

/// Renders each item as a header line, its text and its comments
pub struct TextRenderer {
    /// Print "No comments" under items without active comments
    empty_placeholder: bool,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self {
            empty_placeholder: true,
        }
    }

    /// Set whether items without comments get a placeholder line
    pub fn with_empty_placeholder(mut self, show: bool) -> Self {
        self.empty_placeholder = show;
        self
    }

    fn render_item(&self, view: &ContentView, out: &mut String) {
        out.push_str(&format!("Id: {}  Note: {}\n", view.id, view.title));
        out.push_str(&view.text);
        out.push('\n');

        if view.comments.is_empty() {
            if self.empty_placeholder {
                out.push_str("No comments\n");
            }
        } else {
            out.push_str("Comments:\n");
            for comment in &view.comments {
                out.push_str(&format!("{} (author: {})\n", comment.text, comment.author_id));
            }
        }
        out.push('\n');
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TextRenderer {
    fn render(&self, views: &[ContentView]) -> Result<String> {
        let mut out = String::new();
        for view in views {
            self.render_item(view, &mut out);
        }
        Ok(out)
    }

    fn format_name(&self) -> &str {
        "text"
    }
}
