//! Interaction tools and their per-tool scratch state.

use crate::util::Point;

/// The interaction modes a toolbar button can activate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    Segment,
    Rect,
    Circle,
    Polyline,
    Select,
}

/// Phase of a two-point drag interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    /// Idle, waiting for a primary press.
    Wait,
    /// Primary button held, anchor captured, tracking the pointer.
    Interact { anchor: Point },
}

/// The active tool together with its in-progress interaction state.
///
/// Exactly one tool is active at a time; switching tools discards whatever
/// interaction the previous tool had in progress.
#[derive(Debug, Clone, PartialEq)]
pub enum Tool {
    Segment { phase: DragPhase },
    Rect { phase: DragPhase },
    Circle { phase: DragPhase },
    Polyline { points: Vec<Point> },
    Select { selection: Option<usize> },
}

impl Tool {
    /// Creates the given tool kind in its idle state.
    pub fn new(kind: ToolKind) -> Self {
        match kind {
            ToolKind::Segment => Tool::Segment {
                phase: DragPhase::Wait,
            },
            ToolKind::Rect => Tool::Rect {
                phase: DragPhase::Wait,
            },
            ToolKind::Circle => Tool::Circle {
                phase: DragPhase::Wait,
            },
            ToolKind::Polyline => Tool::Polyline { points: Vec::new() },
            ToolKind::Select => Tool::Select { selection: None },
        }
    }

    pub fn kind(&self) -> ToolKind {
        match self {
            Tool::Segment { .. } => ToolKind::Segment,
            Tool::Rect { .. } => ToolKind::Rect,
            Tool::Circle { .. } => ToolKind::Circle,
            Tool::Polyline { .. } => ToolKind::Polyline,
            Tool::Select { .. } => ToolKind::Select,
        }
    }

    /// The scene index of the current selection, if the select tool is
    /// active and holds one.
    pub fn selection(&self) -> Option<usize> {
        match self {
            Tool::Select { selection } => *selection,
            _ => None,
        }
    }
}
