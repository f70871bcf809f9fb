//! Shared drawing style options.

use super::color::{Color, RED, WHITE};

/// Style bundle read by tools when committing new objects.
///
/// A copy is embedded in every committed object, so later changes to the
/// editor-wide options never retroactively restyle existing shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawAttributes {
    /// Border/stroke color
    pub border_color: Color,
    /// Whether the interior is filled
    pub fill_enabled: bool,
    /// Interior color, used only when `fill_enabled` is set
    pub fill_color: Color,
    /// Stroke thickness in pixels, always >= 1
    pub thickness: i32,
}

impl DrawAttributes {
    pub fn new(border_color: Color, fill_enabled: bool, fill_color: Color, thickness: i32) -> Self {
        Self {
            border_color,
            fill_enabled,
            fill_color,
            thickness: thickness.max(1),
        }
    }
}

impl Default for DrawAttributes {
    fn default() -> Self {
        Self {
            border_color: RED,
            fill_enabled: false,
            fill_color: WHITE,
            thickness: 2,
        }
    }
}
