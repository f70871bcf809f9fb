//! Render pass over the editor state.

use crate::draw::render::{render_objects, render_selection_frame};
use crate::draw::Canvas;
use crate::input::tool::{DragPhase, Tool};
use crate::ui::render_toolbar;
use crate::util::normalized_box;

use super::EditorState;

impl EditorState {
    /// Draws one frame: scene objects in paint order, then the toolbar,
    /// then the active tool's overlay (live preview or selection frame) on
    /// top of everything.
    pub fn render(&self, canvas: &mut dyn Canvas) {
        render_objects(canvas, self.scene.objects());
        render_toolbar(canvas, &self.buttons);
        self.render_tool_overlay(canvas);
    }

    /// Uncommitted previews use the current options, so style changes are
    /// visible before commit. Drag previews for rectangle and circle are
    /// drawn filled with the border color.
    fn render_tool_overlay(&self, canvas: &mut dyn Canvas) {
        let opts = &self.options;
        match &self.tool {
            Tool::Segment { phase } => {
                if let DragPhase::Interact { anchor } = *phase {
                    canvas.draw_line(anchor, self.pointer, opts.border_color, opts.thickness);
                }
            }
            Tool::Rect { phase } => {
                if let DragPhase::Interact { anchor } = *phase {
                    let (origin, size) = normalized_box(anchor, self.pointer);
                    canvas.draw_rect(origin, size, opts.border_color, true, opts.thickness);
                }
            }
            Tool::Circle { phase } => {
                if let DragPhase::Interact { anchor } = *phase {
                    let r = (self.pointer - anchor).norm() as i32;
                    canvas.draw_circle(anchor, r, opts.border_color, true, opts.thickness);
                }
            }
            Tool::Polyline { points } => {
                if !points.is_empty() {
                    for seg in points.windows(2) {
                        canvas.draw_line(seg[0], seg[1], opts.border_color, opts.thickness);
                    }
                    // Rubber band from the last confirmed vertex to the
                    // pointer.
                    if let Some(last) = points.last() {
                        canvas.draw_line(*last, self.pointer, opts.border_color, opts.thickness);
                    }
                }
            }
            Tool::Select { selection } => {
                if let Some(obj) = selection.and_then(|index| self.scene.get(index)) {
                    render_selection_frame(canvas, obj);
                }
            }
        }
    }
}
