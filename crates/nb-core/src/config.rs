//! Configuration management for note-board

use crate::error::{NoteBoardError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Listing output settings
    pub display: DisplayConfig,
    /// Logging settings
    pub logging: LoggingConfig,
    /// Values used when a command omits them
    pub defaults: DefaultsConfig,
}

impl Config {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| NoteBoardError::Toml(e.to_string()))
    }

    /// Serialize to pretty TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| NoteBoardError::Toml(e.to_string()))
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
            .map_err(|e| e.with_context(format!("Failed to parse {}", path.display())))
    }

    /// Load a configuration file, or defaults if it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Per-user configuration file location
    pub fn default_path() -> Result<PathBuf> {
        directories::ProjectDirs::from("", "", "note-board")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or_else(|| {
                NoteBoardError::Config("Could not determine a home directory".to_string())
            })
    }
}

/// Listing output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Default output format ("text", "json", "json-compact")
    pub format: String,
    /// Print "No comments" under items without active comments
    pub show_empty_placeholder: bool,
    /// Colored terminal output
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            show_empty_placeholder: true,
            color: true,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when no -v flag is given
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Fallback values for interactive commands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Author recorded when a command does not name one
    pub author_id: u64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self { author_id: 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.display.format, "text");
        assert!(config.display.show_empty_placeholder);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.defaults.author_id, 1);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = config.to_toml_string().unwrap();
        assert!(toml.contains("[display]"));
        assert!(toml.contains("[logging]"));

        let config2 = Config::from_toml_str(&toml).unwrap();
        assert_eq!(config, config2);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::from_toml_str("[display]\nformat = \"json\"\n").unwrap();
        assert_eq!(config.display.format, "json");
        assert!(config.display.show_empty_placeholder);
        assert_eq!(config.defaults.author_id, 1);
    }

    #[test]
    fn test_invalid_config() {
        let err = Config::from_toml_str("[display\nformat = 1").unwrap_err();
        assert!(matches!(err, NoteBoardError::Toml(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[defaults]\nauthor_id = 7").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.defaults.author_id, 7);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }
}
