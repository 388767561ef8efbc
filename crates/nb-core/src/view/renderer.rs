//! Renderer trait and manager

use super::ContentView;
use crate::config::DisplayConfig;
use crate::error::{NoteBoardError, Result};
use std::collections::HashMap;

/// Trait for listing renderers
pub trait Renderer: Send + Sync {
    /// Render a listing to string
    fn render(&self, views: &[ContentView]) -> Result<String>;

    /// Get the format name
    fn format_name(&self) -> &str;
}

/// Manager for handling multiple output formats
pub struct RenderManager {
    renderers: HashMap<String, Box<dyn Renderer>>,
}

impl RenderManager {
    /// Create a new render manager with default renderers
    pub fn new() -> Self {
        Self::from_display(&DisplayConfig::default())
    }

    /// Create a render manager honoring display settings
    pub fn from_display(display: &DisplayConfig) -> Self {
        let mut manager = Self {
            renderers: HashMap::new(),
        };

        manager.register(Box::new(
            super::text::TextRenderer::new().with_empty_placeholder(display.show_empty_placeholder),
        ));
        manager.register(Box::new(super::json::JsonRenderer::new(false)));
        manager.register(Box::new(super::json::JsonRenderer::compact()));

        manager
    }

    /// Register a new renderer, replacing any with the same format name
    pub fn register(&mut self, renderer: Box<dyn Renderer>) {
        self.renderers
            .insert(renderer.format_name().to_string(), renderer);
    }

    /// Render a listing in the specified format
    pub fn render(&self, views: &[ContentView], format: &str) -> Result<String> {
        let renderer = self.renderers.get(format).ok_or_else(|| {
            NoteBoardError::Validation(format!("Unknown output format: {}", format))
        })?;

        renderer.render(views)
    }

    /// Names of all registered formats, sorted
    pub fn formats(&self) -> Vec<&str> {
        let mut formats: Vec<&str> = self.renderers.keys().map(String::as_str).collect();
        formats.sort_unstable();
        formats
    }

    /// Check whether a format is registered
    pub fn has_format(&self, format: &str) -> bool {
        self.renderers.contains_key(format)
    }
}

impl Default for RenderManager {
    fn default() -> Self {
        Self::new()
    }
}
