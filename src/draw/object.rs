//! Geometric scene objects: shape data, bounding boxes, and hit-testing.

use super::attributes::DrawAttributes;
use crate::util::{Point, normalized_box};

/// A committed drawable object.
///
/// Each variant owns its geometry plus a copy of the [`DrawAttributes`] that
/// were current when the object was committed. The two-point variants keep
/// their control points exactly as dragged; a circle derives its radius from
/// the distance between its center (`p1`) and edge point (`p2`).
#[derive(Debug, Clone, PartialEq)]
pub enum GeometricObject {
    /// Straight line between two points
    Segment {
        attrs: DrawAttributes,
        p1: Point,
        p2: Point,
    },
    /// Axis-aligned rectangle spanned by two opposite corners
    Rect {
        attrs: DrawAttributes,
        p1: Point,
        p2: Point,
    },
    /// Circle centered on `p1` passing through `p2`
    Circle {
        attrs: DrawAttributes,
        p1: Point,
        p2: Point,
    },
    /// Open polyline through an ordered list of >= 2 vertices
    Polyline {
        attrs: DrawAttributes,
        points: Vec<Point>,
    },
}

impl GeometricObject {
    /// The style attributes this object was committed with.
    pub fn attributes(&self) -> &DrawAttributes {
        match self {
            GeometricObject::Segment { attrs, .. }
            | GeometricObject::Rect { attrs, .. }
            | GeometricObject::Circle { attrs, .. }
            | GeometricObject::Polyline { attrs, .. } => attrs,
        }
    }

    /// Axis-aligned bounding box as `(origin, size)`.
    ///
    /// Segments pad the box by `max(4, thickness)` so thin lines stay
    /// hit-testable; circles return the `2r` square centered on `p1`.
    pub fn bounding_box(&self) -> (Point, Point) {
        match self {
            GeometricObject::Rect { p1, p2, .. } => normalized_box(*p1, *p2),
            GeometricObject::Segment { attrs, p1, p2 } => {
                let (origin, size) = normalized_box(*p1, *p2);
                let pad = attrs.thickness.max(4);
                (
                    origin - Point::new(pad, pad),
                    size + Point::new(2 * pad, 2 * pad),
                )
            }
            GeometricObject::Circle { p1, p2, .. } => {
                let r = (*p2 - *p1).norm() as i32;
                (*p1 - Point::new(r, r), Point::new(2 * r, 2 * r))
            }
            GeometricObject::Polyline { points, .. } => {
                let Some(first) = points.first() else {
                    return (Point::default(), Point::default());
                };
                let mut min = *first;
                let mut max = *first;
                for p in &points[1..] {
                    min.x = min.x.min(p.x);
                    min.y = min.y.min(p.y);
                    max.x = max.x.max(p.x);
                    max.y = max.y.max(p.y);
                }
                (min, max - min)
            }
        }
    }

    /// Hit test with geometry-specific tolerance.
    pub fn contains(&self, p: Point) -> bool {
        match self {
            GeometricObject::Rect { .. } => {
                let (origin, size) = self.bounding_box();
                p.x >= origin.x
                    && p.x <= origin.x + size.x
                    && p.y >= origin.y
                    && p.y <= origin.y + size.y
            }
            GeometricObject::Segment { attrs, p1, p2 } => {
                segment_contains(*p1, *p2, p, attrs.thickness)
            }
            GeometricObject::Circle { p1, p2, .. } => {
                let r = (*p2 - *p1).norm();
                p.distance(*p1) <= r + 1.0
            }
            GeometricObject::Polyline { points, .. } => points.windows(2).any(|seg| {
                let (a, b) = (seg[0], seg[1]);
                let len = (b - a).norm();
                (p.distance(a) + p.distance(b) - len).abs() < 4.0
            }),
        }
    }

    /// The draggable vertices of this shape, in a fixed, stable order.
    pub fn control_points(&self) -> Vec<Point> {
        match self {
            GeometricObject::Segment { p1, p2, .. }
            | GeometricObject::Rect { p1, p2, .. }
            | GeometricObject::Circle { p1, p2, .. } => vec![*p1, *p2],
            GeometricObject::Polyline { points, .. } => points.clone(),
        }
    }

    /// Returns the control point nearest to `query` within `max_dist`.
    ///
    /// A linear scan that keeps shrinking the acceptance threshold, so ties
    /// resolve to the first point encountered. The returned reference lets a
    /// caller drag the vertex in place.
    pub fn closest_control_point_mut(
        &mut self,
        query: Point,
        max_dist: f64,
    ) -> Option<&mut Point> {
        match self {
            GeometricObject::Segment { p1, p2, .. }
            | GeometricObject::Rect { p1, p2, .. }
            | GeometricObject::Circle { p1, p2, .. } => {
                match closest_index([*p1, *p2], query, max_dist) {
                    Some(0) => Some(p1),
                    Some(_) => Some(p2),
                    None => None,
                }
            }
            GeometricObject::Polyline { points, .. } => {
                closest_index(points.iter().copied(), query, max_dist).map(|i| &mut points[i])
            }
        }
    }
}

/// Index of the point nearest to `query` within `max_dist`.
///
/// The acceptance threshold shrinks as candidates are found, and only a
/// strictly closer point replaces an accepted one, so ties break to the
/// first point encountered.
fn closest_index<I>(points: I, query: Point, max_dist: f64) -> Option<usize>
where
    I: IntoIterator<Item = Point>,
{
    let mut best_dist = max_dist;
    let mut best = None;
    for (i, p) in points.into_iter().enumerate() {
        let d = p.distance(query);
        let closer = match best {
            None => d <= best_dist,
            Some(_) => d < best_dist,
        };
        if closer {
            best_dist = d;
            best = Some(i);
        }
    }
    best
}

/// Point-to-segment distance test with thickness-dependent tolerance.
///
/// Projects the query onto the finite segment (projection parameter clamped
/// to [0, 1]) and accepts when the squared distance is within
/// `(thickness + 4)^2`; a degenerate zero-length segment uses the tighter
/// `(thickness + 3)^2` band around its single point.
fn segment_contains(p1: Point, p2: Point, query: Point, thickness: i32) -> bool {
    let (x0, y0) = (f64::from(query.x), f64::from(query.y));
    let (x1, y1) = (f64::from(p1.x), f64::from(p1.y));
    let (x2, y2) = (f64::from(p2.x), f64::from(p2.y));
    let (dx, dy) = (x2 - x1, y2 - y1);

    if dx == 0.0 && dy == 0.0 {
        let d2 = (x0 - x1).powi(2) + (y0 - y1).powi(2);
        let tol = f64::from(thickness + 3);
        return d2 <= tol * tol;
    }

    let t = (((x0 - x1) * dx + (y0 - y1) * dy) / (dx * dx + dy * dy)).clamp(0.0, 1.0);
    let (px, py) = (x1 + t * dx, y1 + t * dy);
    let d2 = (x0 - px).powi(2) + (y0 - py).powi(2);
    let tol = f64::from(thickness + 4);
    d2 <= tol * tol
}
