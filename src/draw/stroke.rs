//! The freehand stroke being drawn and manipulated.

use crate::util;
use kurbo::{Point, Rect};

/// A single freehand line, stored as the points traced by the pointer.
///
/// Points are kept in drawing order. The stroke only grows by [`append`](Self::append)
/// while a drawing gesture is active, and is otherwise changed wholesale by
/// [`replace_points`](Self::replace_points) when a transform is committed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stroke {
    /// Sequence of points in drawing order
    points: Vec<Point>,
}

impl Stroke {
    /// Creates a new empty stroke.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Creates a stroke starting at `point`.
    pub fn starting_at(point: Point) -> Self {
        Self {
            points: vec![point],
        }
    }

    /// Adds a point to the end of the stroke.
    pub fn append(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Replaces every point at once (used when a transform is committed).
    pub fn replace_points(&mut self, points: Vec<Point>) {
        self.points = points;
    }

    /// Removes all points.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Points in drawing order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns true if the stroke has at least one line segment.
    pub fn is_drawable(&self) -> bool {
        self.points.len() > 1
    }

    /// Axis-aligned box around the raw points (zero box at origin when empty).
    pub fn bounding_box(&self) -> Rect {
        util::bounding_box(&self.points)
    }

    /// Returns true if any stored point is strictly closer than `radius` to `point`.
    ///
    /// Only the raw points are tested, not the segments between them.
    pub fn hit_test(&self, point: Point, radius: f64) -> bool {
        self.points
            .iter()
            .any(|&p| util::distance(point, p) < radius)
    }
}
