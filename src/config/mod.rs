//! Configuration file management
//!
//! Loads TOML configuration files and provides application settings.
//! Default config path: ~/.config/signwrite/config.toml

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Glyph resource settings
    pub font: FontConfig,
    /// Display geometry settings
    pub display: DisplayConfig,
    /// Output settings
    pub output: OutputConfig,
}

/// Glyph resource settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Directory holding one bitmap per codepoint plus `unknown.png`
    pub dir: String,
}

/// Display geometry settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Invert the frame for panels with an inverted blank level
    pub invert: bool,
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default destination when --output is not given
    pub path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            font: FontConfig::default(),
            display: DisplayConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            dir: "/sign/font".to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: DISPLAY_WIDTH,
            height: DISPLAY_HEIGHT,
            invert: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: "/sign/frame.bin".to_string(),
        }
    }
}

impl Config {
    /// Load settings, falling back to built-in defaults.
    ///
    /// A missing config file is normal; a present but broken one is
    /// logged and ignored rather than aborting the render.
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            match Self::load_from_file(&path) {
                Ok(config) => {
                    info!("Loaded config: {}", path.display());
                    return config;
                }
                Err(e) => {
                    warn!("Failed to load config {}: {}", path.display(), e);
                }
            }
        }
        info!("Using built-in default config");
        Self::default()
    }

    /// Resolve the config file location.
    ///
    /// 1. SIGNWRITE_CONFIG environment variable
    /// 2. User config: ~/.config/signwrite/config.toml
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("SIGNWRITE_CONFIG") {
            let p = PathBuf::from(&path);
            if p.exists() {
                return Some(p);
            }
        }

        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("signwrite").join("config.toml");
            if config_path.exists() {
                return Some(config_path);
            }
        }

        None
    }

    fn load_from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.display.width, 128);
        assert_eq!(config.display.height, 64);
        assert!(!config.display.invert);
        assert_eq!(config.output.path, "/sign/frame.bin");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [font]
            dir = "/tmp/glyphs"

            [display]
            invert = true
            "#,
        )
        .unwrap();
        assert_eq!(config.font.dir, "/tmp/glyphs");
        assert!(config.display.invert);
        assert_eq!(config.display.width, 128);
        assert_eq!(config.output.path, "/sign/frame.bin");
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.display.height, 64);
    }
}
