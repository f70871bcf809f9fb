//! Configuration type definitions.

use crate::draw::color::RED;
use crate::draw::Color;
use crate::util;
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Color specification - either a named color or an RGB array.
///
/// # Examples
/// ```toml
/// # Named color
/// border_color = "red"
///
/// # Custom RGB color (0-255 per component)
/// fill_color = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: red, green, blue, cyan, magenta, yellow, black, white
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the specification to a [`Color`].
    ///
    /// Unknown color names fall back to red with a warning; RGB arrays
    /// become fully opaque colors.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => util::name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using red", name);
                RED
            }),
            ColorSpec::Rgb([r, g, b]) => Color::rgb(*r, *g, *b),
        }
    }
}

/// Default drawing options applied when the editor starts.
///
/// Users can change all of these at runtime through the toolbar buttons.
#[derive(Debug, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Default border/stroke color
    #[serde(default = "default_border_color")]
    pub border_color: ColorSpec,

    /// Default interior color for filled shapes
    #[serde(default = "default_fill_color")]
    pub fill_color: ColorSpec,

    /// Whether new shapes start filled
    #[serde(default = "default_filled")]
    pub filled: bool,

    /// Default stroke thickness in pixels (valid range: 1 - 20)
    #[serde(default = "default_thickness")]
    pub thickness: i32,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            border_color: default_border_color(),
            fill_color: default_fill_color(),
            filled: default_filled(),
            thickness: default_thickness(),
        }
    }
}

/// Toolbar display preferences.
#[derive(Debug, Serialize, Deserialize)]
pub struct UiConfig {
    /// Side length of the square toolbar buttons in pixels (valid range: 16 - 200)
    #[serde(default = "default_button_size")]
    pub button_size: i32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            button_size: default_button_size(),
        }
    }
}

/// Startup scene settings.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct SceneConfig {
    /// Optional scene file loaded at startup; the editor starts empty when
    /// unset or when the file does not exist
    #[serde(default)]
    pub startup_path: Option<PathBuf>,
}

fn default_border_color() -> ColorSpec {
    ColorSpec::Name("red".to_string())
}

fn default_fill_color() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_filled() -> bool {
    false
}

fn default_thickness() -> i32 {
    2
}

fn default_button_size() -> i32 {
    80
}
