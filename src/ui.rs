//! Toolbar buttons and the commands they dispatch.

use crate::draw::color::{BLACK, WHITE};
use crate::draw::Canvas;
use crate::input::tool::ToolKind;
use crate::util::Point;

/// The closed set of actions a toolbar button can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SelectTool(ToolKind),
    CycleBorderColor,
    CycleFillColor,
    CycleThickness,
    ToggleFilled,
    BringToFront,
    SendToBack,
    Delete,
}

/// One toolbar button: a screen rectangle bound to a command.
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub label: &'static str,
    pub icon: &'static str,
    pub origin: Point,
    pub size: Point,
    pub command: Command,
}

impl Button {
    pub fn new(
        label: &'static str,
        icon: &'static str,
        origin: Point,
        size: Point,
        command: Command,
    ) -> Self {
        Self {
            label,
            icon,
            origin,
            size,
            command,
        }
    }

    /// Whether `p` lies inside the button's screen rectangle.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.origin.x
            && p.x <= self.origin.x + self.size.x
            && p.y >= self.origin.y
            && p.y <= self.origin.y + self.size.y
    }
}

/// Builds the default button row, laid out left to right at the top of the
/// window, `button_size` pixels square each.
pub fn build_toolbar(button_size: i32) -> Vec<Button> {
    let entries: [(&'static str, &'static str, Command); 12] = [
        ("Seg", "segment", Command::SelectTool(ToolKind::Segment)),
        ("Rect", "rectangle", Command::SelectTool(ToolKind::Rect)),
        ("Circ", "circle", Command::SelectTool(ToolKind::Circle)),
        ("Del", "delete", Command::Delete),
        ("Sel", "select", Command::SelectTool(ToolKind::Select)),
        ("Front", "front", Command::BringToFront),
        ("Back", "back", Command::SendToBack),
        ("Bord", "border-color", Command::CycleBorderColor),
        ("Fill", "fill-color", Command::CycleFillColor),
        ("Thick", "thickness", Command::CycleThickness),
        ("Fld", "filled", Command::ToggleFilled),
        ("Poly", "polygon", Command::SelectTool(ToolKind::Polyline)),
    ];

    entries
        .iter()
        .enumerate()
        .map(|(i, &(label, icon, command))| {
            Button::new(
                label,
                icon,
                Point::new(i as i32 * button_size, 0),
                Point::new(button_size, button_size),
                command,
            )
        })
        .collect()
}

/// Draws the button row: white plates, black outline, black label.
pub fn render_toolbar(canvas: &mut dyn Canvas, buttons: &[Button]) {
    for button in buttons {
        canvas.draw_rect(button.origin, button.size, WHITE, true, 1);
        canvas.draw_rect(button.origin, button.size, BLACK, false, 1);
        let text_pos = button.origin + Point::new(4, button.size.y / 2);
        canvas.draw_text(text_pos, button.label, button.size.y / 4, BLACK);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toolbar_lays_buttons_out_left_to_right() {
        let buttons = build_toolbar(80);
        assert_eq!(buttons.len(), 12);
        assert_eq!(buttons[0].origin, Point::new(0, 0));
        assert_eq!(buttons[1].origin, Point::new(80, 0));
        assert_eq!(buttons[11].origin, Point::new(880, 0));
        assert_eq!(buttons[0].size, Point::new(80, 80));
    }

    #[test]
    fn button_containment_includes_edges() {
        let button = Button::new(
            "Sel",
            "select",
            Point::new(100, 0),
            Point::new(80, 80),
            Command::SelectTool(ToolKind::Select),
        );
        assert!(button.contains(Point::new(100, 0)));
        assert!(button.contains(Point::new(180, 80)));
        assert!(button.contains(Point::new(140, 40)));
        assert!(!button.contains(Point::new(181, 40)));
        assert!(!button.contains(Point::new(99, 40)));
    }
}
