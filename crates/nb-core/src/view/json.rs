//! JSON listing

use super::renderer::Renderer;
use super::ContentView;
use crate::error::Result;

/// JSON renderer with compact mode support
pub struct JsonRenderer {
    /// Whether to use pretty-print formatting
    pretty: bool,
    /// Format name
    name: String,
}

impl JsonRenderer {
    /// Create a new JSON renderer
    pub fn new(compact: bool) -> Self {
        Self {
            pretty: !compact,
            name: if compact {
                "json-compact".to_string()
            } else {
                "json".to_string()
            },
        }
    }

    /// Create a compact JSON renderer
    pub fn compact() -> Self {
        Self::new(true)
    }

    /// Create a pretty-printed JSON renderer
    pub fn pretty() -> Self {
        Self::new(false)
    }
}

impl Renderer for JsonRenderer {
    fn render(&self, views: &[ContentView]) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(views)?
        } else {
            serde_json::to_string(views)?
        };
        Ok(json)
    }

    fn format_name(&self) -> &str {
        &self.name
    }
}
