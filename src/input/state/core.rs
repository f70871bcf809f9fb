//! Editor state container and event dispatch.

use crate::draw::DrawAttributes;
use crate::input::events::{InputEvent, MouseButton};
use crate::input::tool::{Tool, ToolKind};
use crate::scene::Scene;
use crate::ui::Button;
use crate::util::Point;

/// Process-wide editor state.
///
/// Holds the scene, the active tool, the tracked pointer position, the
/// current drawing options, and the toolbar. Constructed once at startup
/// and mutated on the single event-processing thread; rendering reads it
/// but never mutates it.
pub struct EditorState {
    /// Committed objects in paint order.
    pub scene: Scene,
    /// Active tool with its in-progress interaction state.
    pub tool: Tool,
    /// Pointer position from the latest move event.
    pub pointer: Point,
    /// Style copied into each object at commit time.
    pub options: DrawAttributes,
    /// Toolbar buttons tested on primary presses.
    pub buttons: Vec<Button>,
    /// Positions in the option palettes, advanced by the cycle commands.
    pub(super) border_index: usize,
    pub(super) fill_index: usize,
    pub(super) thickness_index: usize,
}

impl EditorState {
    /// Creates an editor with an empty scene.
    ///
    /// `options` seeds the drawing style; `buttons` is the toolbar row
    /// (may be empty for headless use).
    pub fn with_defaults(options: DrawAttributes, buttons: Vec<Button>) -> Self {
        Self::with_scene(Scene::new(), options, buttons)
    }

    /// Builds an editor from user configuration: default drawing options, a
    /// toolbar sized per config, and the startup scene when one is
    /// configured and present on disk.
    pub fn from_config(config: &crate::Config) -> anyhow::Result<Self> {
        let scene = match &config.scene.startup_path {
            Some(path) if path.exists() => crate::scene::storage::load_scene(path)?,
            Some(path) => {
                log::warn!(
                    "Startup scene {} not found, starting empty",
                    path.display()
                );
                Scene::new()
            }
            None => Scene::new(),
        };
        Ok(Self::with_scene(
            scene,
            config.draw_attributes(),
            crate::ui::build_toolbar(config.ui.button_size),
        ))
    }

    /// Creates an editor over a pre-populated scene.
    pub fn with_scene(scene: Scene, options: DrawAttributes, buttons: Vec<Button>) -> Self {
        Self {
            scene,
            tool: Tool::new(ToolKind::Segment),
            pointer: Point::new(0, 0),
            options,
            buttons,
            border_index: 0,
            fill_index: 0,
            thickness_index: 0,
        }
    }

    /// Activates `kind`, discarding any in-progress interaction of the
    /// previous tool.
    pub fn set_tool(&mut self, kind: ToolKind) {
        if self.tool.kind() != kind {
            log::debug!("Tool switched to {:?}", kind);
        }
        self.tool = Tool::new(kind);
    }

    /// The current selection as a scene index, if any.
    pub fn selection(&self) -> Option<usize> {
        self.tool.selection()
    }

    /// Routes one input event.
    ///
    /// A pointer move updates the tracked position before any routing. A
    /// primary press inside a toolbar button runs that button's command and
    /// stops; every other event goes to the active tool. Exactly one of
    /// {button, tool} consumes an event.
    pub fn dispatch_event(&mut self, event: InputEvent) {
        if let InputEvent::PointerMoved { x, y } = event {
            self.pointer = Point::new(x, y);
        }

        if matches!(
            event,
            InputEvent::ButtonPressed {
                button: MouseButton::Left
            }
        ) {
            let pointer = self.pointer;
            let hit = self
                .buttons
                .iter()
                .find(|b| b.contains(pointer))
                .map(|b| b.command);
            if let Some(command) = hit {
                self.handle_command(command);
                return;
            }
        }

        self.handle_tool_event(event);
    }

    pub(super) fn handle_tool_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::ButtonPressed { button } => self.on_button_press(button),
            InputEvent::ButtonReleased { button } => self.on_button_release(button),
            InputEvent::KeyPressed { key } => self.on_key_press(key),
            // Moves only update the tracked pointer; no tool mutates state
            // on motion.
            InputEvent::PointerMoved { .. } => {}
        }
    }
}
