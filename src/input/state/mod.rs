//! Editor state: scene, active tool, options, and event dispatch.

mod actions;
mod core;
mod mouse;
mod render;

#[cfg(test)]
mod tests;

pub use core::EditorState;
