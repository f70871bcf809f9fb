//! Geometry primitives and color-name helpers shared across the editor.

use crate::draw::{Color, color::*};
use std::ops::{Add, Neg, Sub};

/// Integer 2D point, also used as a vector for offsets and sizes.
///
/// Copied freely; all arithmetic produces new values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean length of this point treated as a vector.
    pub fn norm(self) -> f64 {
        let x = f64::from(self.x);
        let y = f64::from(self.y);
        (x * x + y * y).sqrt()
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Point) -> f64 {
        (other - self).norm()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

/// Normalizes two corner points into `(origin, size)`.
///
/// The origin is the componentwise minimum, the size the componentwise
/// extent, so the size is never negative regardless of drag direction.
pub fn normalized_box(p1: Point, p2: Point) -> (Point, Point) {
    let origin = Point::new(p1.x.min(p2.x), p1.y.min(p2.y));
    let size = Point::new((p1.x - p2.x).abs(), (p1.y - p2.y).abs());
    (origin, size)
}

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config
/// file. Recognized names (case-insensitive): red, green, blue, cyan,
/// magenta, yellow, black, white.
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "cyan" => Some(CYAN),
        "magenta" => Some(MAGENTA),
        "yellow" => Some(YELLOW),
        "black" => Some(BLACK),
        "white" => Some(WHITE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic_behaves_like_vectors() {
        let a = Point::new(3, 4);
        let b = Point::new(1, -2);
        assert_eq!(a + b, Point::new(4, 2));
        assert_eq!(a - b, Point::new(2, 6));
        assert_eq!(-a, Point::new(-3, -4));
        assert_eq!(a.norm(), 5.0);
        assert_eq!(Point::new(0, 0).distance(a), 5.0);
    }

    #[test]
    fn normalized_box_handles_any_drag_direction() {
        let (origin, size) = normalized_box(Point::new(50, 60), Point::new(10, 10));
        assert_eq!(origin, Point::new(10, 10));
        assert_eq!(size, Point::new(40, 50));

        let (origin, size) = normalized_box(Point::new(5, 5), Point::new(5, 5));
        assert_eq!(origin, Point::new(5, 5));
        assert_eq!(size, Point::new(0, 0));
    }

    #[test]
    fn name_to_color_recognizes_palette_names() {
        assert_eq!(name_to_color("red"), Some(RED));
        assert_eq!(name_to_color("Magenta"), Some(MAGENTA));
        assert_eq!(name_to_color("chartreuse"), None);
    }
}
