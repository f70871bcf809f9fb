//! Drawing types: colors, style attributes, scene objects, and rendering.
//!
//! This module defines the core drawing vocabulary of the editor:
//! - [`Color`]: integer RGBA with the predefined palette constants
//! - [`DrawAttributes`]: style bundle copied into each committed object
//! - [`GeometricObject`]: the closed shape hierarchy with hit-testing
//! - [`Canvas`]: the draw-primitive seam to the windowing backend
//! - the line codec and rendering passes over committed objects

pub mod attributes;
pub mod canvas;
pub mod codec;
pub mod color;
pub mod object;
pub mod render;

// Re-export commonly used types at module level
pub use attributes::DrawAttributes;
pub use canvas::{Canvas, DrawCall, RecordingCanvas};
pub use codec::ObjectParseError;
pub use color::Color;
pub use object::GeometricObject;
pub use render::{render_object, render_objects, render_selection_frame};
