//! Toolbar command handling and selection operations.

use crate::draw::color::{BLACK, BLUE, CYAN, GREEN, MAGENTA, RED, WHITE, YELLOW};
use crate::draw::Color;
use crate::input::tool::Tool;
use crate::ui::Command;
use log::debug;

use super::EditorState;

/// Border colors in cycle order.
pub const BORDER_PALETTE: [Color; 7] = [RED, GREEN, BLUE, CYAN, MAGENTA, YELLOW, BLACK];

/// Fill colors in cycle order.
pub const FILL_PALETTE: [Color; 7] = [WHITE, RED, GREEN, BLUE, CYAN, MAGENTA, YELLOW];

/// Stroke widths in cycle order.
pub const THICKNESS_PALETTE: [i32; 4] = [1, 2, 3, 5];

impl EditorState {
    /// Runs one toolbar command against the editor state.
    pub fn handle_command(&mut self, command: Command) {
        match command {
            Command::SelectTool(kind) => self.set_tool(kind),
            Command::CycleBorderColor => {
                self.border_index = (self.border_index + 1) % BORDER_PALETTE.len();
                self.options.border_color = BORDER_PALETTE[self.border_index];
            }
            Command::CycleFillColor => {
                self.fill_index = (self.fill_index + 1) % FILL_PALETTE.len();
                self.options.fill_color = FILL_PALETTE[self.fill_index];
            }
            Command::CycleThickness => {
                self.thickness_index = (self.thickness_index + 1) % THICKNESS_PALETTE.len();
                self.options.thickness = THICKNESS_PALETTE[self.thickness_index];
            }
            Command::ToggleFilled => {
                self.options.fill_enabled = !self.options.fill_enabled;
            }
            Command::BringToFront => self.bring_selection_to_front(),
            Command::SendToBack => self.send_selection_to_back(),
            Command::Delete => {
                // Delete removes the selection when the select tool holds
                // one; otherwise it wipes the scene.
                if self.selection().is_some() {
                    self.delete_selection();
                } else {
                    debug!("Clearing scene ({} objects)", self.scene.len());
                    self.scene.clear();
                }
            }
        }
    }

    /// Moves the selected object to the top of the paint order. No-op
    /// without a selection.
    pub fn bring_selection_to_front(&mut self) {
        if let Tool::Select { selection } = &mut self.tool {
            if let Some(index) = *selection {
                *selection = self.scene.bring_to_front(index);
            }
        }
    }

    /// Moves the selected object to the bottom of the paint order. No-op
    /// without a selection.
    pub fn send_selection_to_back(&mut self) {
        if let Tool::Select { selection } = &mut self.tool {
            if let Some(index) = *selection {
                *selection = self.scene.send_to_back(index);
            }
        }
    }

    /// Removes the selected object and clears the selection in the same
    /// step. No-op without a selection.
    pub fn delete_selection(&mut self) {
        if let Tool::Select { selection } = &mut self.tool {
            if let Some(index) = selection.take() {
                self.scene.remove(index);
            }
        }
    }
}
