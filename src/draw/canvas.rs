//! Drawing surface abstraction implemented by the windowing backend.

use super::color::Color;
use crate::util::Point;

/// Draw primitives the editor core needs from a rendering backend.
///
/// Coordinates are window pixels; `thickness` is the stroke width for
/// outline drawing and ignored for filled primitives.
pub trait Canvas {
    fn draw_line(&mut self, from: Point, to: Point, color: Color, thickness: i32);
    fn draw_rect(&mut self, origin: Point, size: Point, color: Color, filled: bool, thickness: i32);
    fn draw_circle(&mut self, center: Point, radius: i32, color: Color, filled: bool, thickness: i32);
    /// Monospace text at `pos`, `size` pixels tall.
    fn draw_text(&mut self, pos: Point, text: &str, size: i32, color: Color);
}

/// A single recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Line {
        from: Point,
        to: Point,
        color: Color,
        thickness: i32,
    },
    Rect {
        origin: Point,
        size: Point,
        color: Color,
        filled: bool,
        thickness: i32,
    },
    Circle {
        center: Point,
        radius: i32,
        color: Color,
        filled: bool,
        thickness: i32,
    },
    Text {
        pos: Point,
        text: String,
        size: i32,
        color: Color,
    },
}

/// Canvas that records draw calls instead of rasterizing.
///
/// Used by headless tests to assert on what a render pass produced.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn draw_line(&mut self, from: Point, to: Point, color: Color, thickness: i32) {
        self.calls.push(DrawCall::Line {
            from,
            to,
            color,
            thickness,
        });
    }

    fn draw_rect(&mut self, origin: Point, size: Point, color: Color, filled: bool, thickness: i32) {
        self.calls.push(DrawCall::Rect {
            origin,
            size,
            color,
            filled,
            thickness,
        });
    }

    fn draw_circle(&mut self, center: Point, radius: i32, color: Color, filled: bool, thickness: i32) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            color,
            filled,
            thickness,
        });
    }

    fn draw_text(&mut self, pos: Point, text: &str, size: i32, color: Color) {
        self.calls.push(DrawCall::Text {
            pos,
            text: text.to_string(),
            size,
            color,
        });
    }
}
