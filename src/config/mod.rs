//! Configuration file support for pictor.
//!
//! This module handles loading and validating user settings from the
//! configuration file at `~/.config/pictor/config.toml`. Settings cover the
//! default drawing options, toolbar sizing, and an optional startup scene.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod types;

// Re-export commonly used types at module level
pub use types::{ColorSpec, DrawingConfig, SceneConfig, UiConfig};

use crate::draw::DrawAttributes;
use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// All fields have sensible defaults and fall back to those when not present
/// in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// border_color = "red"
/// fill_color = [255, 128, 0]
/// filled = false
/// thickness = 2
///
/// [ui]
/// button_size = 80
///
/// [scene]
/// startup_path = "/home/user/drawing.txt"
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Drawing option defaults (colors, fill flag, thickness)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Toolbar display preferences
    #[serde(default)]
    pub ui: UiConfig,

    /// Startup scene settings
    #[serde(default)]
    pub scene: SceneConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning
    /// is logged.
    ///
    /// Validated ranges:
    /// - `drawing.thickness`: 1 - 20
    /// - `ui.button_size`: 16 - 200
    fn validate_and_clamp(&mut self) {
        if !(1..=20).contains(&self.drawing.thickness) {
            log::warn!(
                "Invalid thickness {}, clamping to 1-20 range",
                self.drawing.thickness
            );
            self.drawing.thickness = self.drawing.thickness.clamp(1, 20);
        }

        if !(16..=200).contains(&self.ui.button_size) {
            log::warn!(
                "Invalid button_size {}, clamping to 16-200 range",
                self.ui.button_size
            );
            self.ui.button_size = self.ui.button_size.clamp(16, 200);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/pictor/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    /// (e.g., HOME not set).
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("pictor");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults
    /// if no file exists.
    ///
    /// # Errors
    /// Returns an error if the config directory path cannot be determined,
    /// or the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// The drawing options this configuration selects.
    pub fn draw_attributes(&self) -> DrawAttributes {
        DrawAttributes::new(
            self.drawing.border_color.to_color(),
            self.drawing.filled,
            self.drawing.fill_color.to_color(),
            self.drawing.thickness,
        )
    }
}
