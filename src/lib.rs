//! Core of an interactive 2D vector drawing editor.
//!
//! The crate owns the scene-object model (shapes, hit-testing, bounding
//! boxes, text serialization) and the per-tool interaction state machines
//! that turn raw input events into committed scene mutations. Window
//! creation and pixel rendering live behind the [`draw::Canvas`] trait and
//! are supplied by an embedding backend.

pub mod config;
pub mod draw;
pub mod input;
pub mod scene;
pub mod ui;
pub mod util;

pub use config::Config;
pub use input::EditorState;
