//! Application configuration.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid config {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Editor settings. Every field is optional in the config file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Name of the palette store.
    pub store_name: String,
    /// Size of a palette glyph; dropped stickers get this size at zoom 1.
    pub palette_emoji_size: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
    /// Open with the starter stickers instead of an empty document.
    pub starter_stickers: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_name: "Main".to_string(),
            palette_emoji_size: 40.0,
            viewport_width: 1280.0,
            viewport_height: 800.0,
            starter_stickers: true,
        }
    }
}

impl AppConfig {
    /// Load a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}
