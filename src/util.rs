//! Geometry helpers for strokes, selection boxes and affine transforms.
//!
//! This module provides:
//! - Distance and bounding-box calculations over stroke points
//! - Construction of the rotation/translation transforms used by gestures
//! - Pivot-relative transform application shared by preview and commit
//! - Rotation handle placement

use kurbo::{Affine, Point, Rect, Vec2};

// ============================================================================
// Distances and Bounds
// ============================================================================

/// Euclidean distance between two points.
pub fn distance(p1: Point, p2: Point) -> f64 {
    (p2 - p1).hypot()
}

/// Returns the axis-aligned box spanning every point.
///
/// An empty slice yields a zero-sized box at the origin so callers never have
/// to special-case "no stroke yet".
pub fn bounding_box(points: &[Point]) -> Rect {
    let Some((first, rest)) = points.split_first() else {
        return Rect::ZERO;
    };

    rest.iter()
        .fold(Rect::from_points(*first, *first), |rect, &p| rect.union_pt(p))
}

/// Returns the four corners of `rect` in clockwise order (y-down):
/// top-left, top-right, bottom-right, bottom-left.
pub fn bounding_corners(rect: Rect) -> [Point; 4] {
    [
        Point::new(rect.x0, rect.y0),
        Point::new(rect.x1, rect.y0),
        Point::new(rect.x1, rect.y1),
        Point::new(rect.x0, rect.y1),
    ]
}

/// Returns true if `point` lies inside `rect` (min edges inclusive, max exclusive).
pub fn rect_contains(rect: Rect, point: Point) -> bool {
    rect.contains(point)
}

// ============================================================================
// Affine Transforms
// ============================================================================

/// Builds a rotation by `angle` radians about the origin.
pub fn rotation(angle: f64) -> Affine {
    Affine::rotate(angle)
}

/// Builds a pure translation by `delta`.
pub fn translation(delta: Vec2) -> Affine {
    Affine::translate(delta)
}

/// Angle of `point` as seen from `pivot`, measured from the positive x-axis.
pub fn angle_about(point: Point, pivot: Point) -> f64 {
    (point - pivot).atan2()
}

/// Applies `transform` to `point` with `pivot` as the local origin.
///
/// The point is moved into pivot space, transformed, and moved back. Live
/// previews and committed strokes both go through here.
pub fn apply_transform(point: Point, transform: Affine, pivot: Point) -> Point {
    let local = point - pivot.to_vec2();
    transform * local + pivot.to_vec2()
}

/// Returns true if `transform` is exactly the identity.
pub fn is_identity(transform: Affine) -> bool {
    transform == Affine::IDENTITY
}

// ============================================================================
// Rotation Handle
// ============================================================================

/// Calculates where the rotation handle sits for a (possibly transformed) box.
///
/// The handle lies `offset` units outward from the midpoint of the box's right
/// edge, perpendicular to that edge after `transform` has been applied about
/// `pivot`.
///
/// # Arguments
/// * `rect` - Untransformed bounding box of the stroke
/// * `transform` - Live transform of the current gesture
/// * `pivot` - Pivot the transform is applied about
/// * `offset` - Distance from the edge midpoint to the handle
///
/// # Returns
/// The handle centre. A zero-length right edge puts the handle on the edge
/// midpoint itself.
pub fn rotation_handle_position(rect: Rect, transform: Affine, pivot: Point, offset: f64) -> Point {
    let top_right = apply_transform(Point::new(rect.x1, rect.y0), transform, pivot);
    let bottom_right = apply_transform(Point::new(rect.x1, rect.y1), transform, pivot);
    let mid = top_right.midpoint(bottom_right);

    let edge = bottom_right - top_right;
    let len = edge.hypot();
    if len > 0.0 {
        mid + Vec2::new(edge.y, -edge.x) / len * offset
    } else {
        mid
    }
}
