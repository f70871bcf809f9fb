//! Input handling and tool state machines.
//!
//! This module translates backend pointer and keyboard events into scene
//! mutations. It owns the active tool, the tracked pointer position, the
//! current drawing options, and the event dispatch that routes each event
//! to either a toolbar button or the active tool.

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{InputEvent, Key, MouseButton};
pub use state::EditorState;
pub use tool::{DragPhase, Tool, ToolKind};
