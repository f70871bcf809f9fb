use crate::draw::GeometricObject;
use crate::input::events::{Key, MouseButton};
use crate::input::tool::{DragPhase, Tool};
use log::debug;

use super::EditorState;

impl EditorState {
    /// Processes a pointer button press routed to the active tool.
    ///
    /// Primary press anchors a two-point drag for the shape tools and
    /// appends a vertex for the polyline tool; secondary press finishes an
    /// in-progress polyline.
    pub(super) fn on_button_press(&mut self, button: MouseButton) {
        let pointer = self.pointer;
        match button {
            MouseButton::Left => match &mut self.tool {
                Tool::Segment { phase } | Tool::Rect { phase } | Tool::Circle { phase } => {
                    if *phase == DragPhase::Wait {
                        *phase = DragPhase::Interact { anchor: pointer };
                    }
                }
                Tool::Polyline { points } => {
                    points.push(pointer);
                }
                Tool::Select { .. } => {}
            },
            MouseButton::Right => {
                if matches!(self.tool, Tool::Polyline { .. }) {
                    self.finish_polyline();
                }
            }
            MouseButton::Middle => {}
        }
    }

    /// Processes a pointer button release routed to the active tool.
    ///
    /// Primary release commits the pending shape of a dragging tool, or
    /// resolves the selection for the select tool.
    pub(super) fn on_button_release(&mut self, button: MouseButton) {
        if button != MouseButton::Left {
            return;
        }

        let pointer = self.pointer;
        let options = self.options;
        match &mut self.tool {
            Tool::Segment { phase } => {
                if let DragPhase::Interact { anchor } = *phase {
                    *phase = DragPhase::Wait;
                    self.scene.push(GeometricObject::Segment {
                        attrs: options,
                        p1: anchor,
                        p2: pointer,
                    });
                }
            }
            Tool::Rect { phase } => {
                if let DragPhase::Interact { anchor } = *phase {
                    *phase = DragPhase::Wait;
                    self.scene.push(GeometricObject::Rect {
                        attrs: options,
                        p1: anchor,
                        p2: pointer,
                    });
                }
            }
            Tool::Circle { phase } => {
                if let DragPhase::Interact { anchor } = *phase {
                    *phase = DragPhase::Wait;
                    self.scene.push(GeometricObject::Circle {
                        attrs: options,
                        p1: anchor,
                        p2: pointer,
                    });
                }
            }
            Tool::Polyline { .. } => {}
            Tool::Select { selection } => {
                let hit = self.scene.hit_test(pointer);
                // Releasing on the already-selected object toggles it off.
                *selection = match (hit, *selection) {
                    (Some(found), Some(current)) if found == current => None,
                    _ => hit,
                };
            }
        }
    }

    /// Processes a key press routed to the active tool.
    pub(super) fn on_key_press(&mut self, key: Key) {
        if key == Key::Return && matches!(self.tool, Tool::Polyline { .. }) {
            self.finish_polyline();
        }
    }

    /// Ends a polyline interaction: commit when at least two vertices were
    /// accumulated, discard otherwise, and return to idle either way.
    pub(super) fn finish_polyline(&mut self) {
        if let Tool::Polyline { points } = &mut self.tool {
            let points = std::mem::take(points);
            if points.len() >= 2 {
                self.scene.push(GeometricObject::Polyline {
                    attrs: self.options,
                    points,
                });
            } else if !points.is_empty() {
                debug!("Discarding polyline with a single vertex");
            }
        }
    }
}
