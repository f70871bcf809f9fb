//! Rendering of committed scene objects.

use super::canvas::Canvas;
use super::color::MAGENTA;
use super::object::GeometricObject;
use crate::util::{Point, normalized_box};

/// Outset of the selection frame around the selected object's bounding box.
const SELECTION_MARGIN: i32 = 4;

/// Renders all objects in paint order (first = bottom layer).
pub fn render_objects(canvas: &mut dyn Canvas, objects: &[GeometricObject]) {
    for obj in objects {
        render_object(canvas, obj);
    }
}

/// Renders a single object: interior fill first (when enabled), then border.
pub fn render_object(canvas: &mut dyn Canvas, obj: &GeometricObject) {
    match obj {
        GeometricObject::Rect { attrs, p1, p2 } => {
            let (origin, size) = normalized_box(*p1, *p2);
            if attrs.fill_enabled {
                canvas.draw_rect(origin, size, attrs.fill_color, true, attrs.thickness);
            }
            canvas.draw_rect(origin, size, attrs.border_color, false, attrs.thickness);
        }
        GeometricObject::Segment { attrs, p1, p2 } => {
            canvas.draw_line(*p1, *p2, attrs.border_color, attrs.thickness);
        }
        GeometricObject::Circle { attrs, p1, p2 } => {
            let r = (*p2 - *p1).norm() as i32;
            if attrs.fill_enabled {
                canvas.draw_circle(*p1, r, attrs.fill_color, true, attrs.thickness);
            }
            canvas.draw_circle(*p1, r, attrs.border_color, false, attrs.thickness);
        }
        GeometricObject::Polyline { attrs, points } => {
            for seg in points.windows(2) {
                canvas.draw_line(seg[0], seg[1], attrs.border_color, attrs.thickness);
            }
        }
    }
}

/// Draws the highlighted frame around a selected object's bounding box.
pub fn render_selection_frame(canvas: &mut dyn Canvas, obj: &GeometricObject) {
    let (origin, size) = obj.bounding_box();
    let margin = Point::new(SELECTION_MARGIN, SELECTION_MARGIN);
    canvas.draw_rect(origin - margin, size + margin + margin, MAGENTA, false, 4);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::attributes::DrawAttributes;
    use crate::draw::canvas::{DrawCall, RecordingCanvas};
    use crate::draw::color::{GREEN, RED};

    #[test]
    fn filled_rect_draws_interior_before_border() {
        let rect = GeometricObject::Rect {
            attrs: DrawAttributes::new(RED, true, GREEN, 3),
            p1: Point::new(40, 50),
            p2: Point::new(10, 20),
        };
        let mut canvas = RecordingCanvas::new();
        render_object(&mut canvas, &rect);

        assert_eq!(
            canvas.calls,
            vec![
                DrawCall::Rect {
                    origin: Point::new(10, 20),
                    size: Point::new(30, 30),
                    color: GREEN,
                    filled: true,
                    thickness: 3,
                },
                DrawCall::Rect {
                    origin: Point::new(10, 20),
                    size: Point::new(30, 30),
                    color: RED,
                    filled: false,
                    thickness: 3,
                },
            ]
        );
    }

    #[test]
    fn polyline_draws_one_line_per_edge() {
        let poly = GeometricObject::Polyline {
            attrs: DrawAttributes::new(RED, false, GREEN, 1),
            points: vec![Point::new(0, 0), Point::new(10, 0), Point::new(10, 10)],
        };
        let mut canvas = RecordingCanvas::new();
        render_object(&mut canvas, &poly);
        assert_eq!(canvas.calls.len(), 2);
    }

    #[test]
    fn selection_frame_outsets_the_bounding_box() {
        let rect = GeometricObject::Rect {
            attrs: DrawAttributes::default(),
            p1: Point::new(10, 10),
            p2: Point::new(30, 20),
        };
        let mut canvas = RecordingCanvas::new();
        render_selection_frame(&mut canvas, &rect);
        assert_eq!(
            canvas.calls,
            vec![DrawCall::Rect {
                origin: Point::new(6, 6),
                size: Point::new(28, 18),
                color: MAGENTA,
                filled: false,
                thickness: 4,
            }]
        );
    }
}
