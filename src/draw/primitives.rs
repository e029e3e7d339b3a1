//! Display-ready primitives describing one frame.
//!
//! The interaction core never draws. Each frame it produces an ordered list of
//! [`RenderPrimitive`]s that a renderer (see [`super::render`]) paints as-is.

use super::color::{BLACK, Color, SYSTEM_BLUE};
use super::stroke::Stroke;
use crate::util;
use kurbo::{Affine, Point};
use serde::Serialize;

/// One item for the renderer to paint, in back-to-front order.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderPrimitive {
    /// Open polyline through the stroke points
    Polyline {
        /// Display coordinates, in drawing order
        points: Vec<Point>,
        /// Line color
        color: Color,
        /// Line width in pixels
        width: f64,
    },
    /// Closed quadrilateral around the selected stroke
    Outline {
        /// Transformed bounding-box corners: top-left, top-right, bottom-right, bottom-left
        corners: [Point; 4],
        /// Outline color
        color: Color,
        /// Outline width in pixels
        width: f64,
    },
    /// Filled circle marking the rotation handle
    Handle {
        /// Circle centre
        center: Point,
        /// Circle radius
        radius: f64,
        /// Fill color
        color: Color,
    },
}

/// Fixed appearance of the stroke and the selection chrome.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderStyle {
    pub stroke_color: Color,
    pub stroke_width: f64,
    pub accent_color: Color,
    pub accent_width: f64,
    pub handle_radius: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            stroke_color: BLACK,
            stroke_width: 2.0,
            accent_color: SYSTEM_BLUE,
            accent_width: 1.0,
            handle_radius: 12.0,
        }
    }
}

/// Selection state needed to draw the selection chrome.
#[derive(Clone, Copy, Debug)]
pub struct SelectionView {
    /// Live transform of the current gesture (identity when idle)
    pub transform: Affine,
    /// Pivot the transform is applied about
    pub pivot: Point,
    /// Distance of the rotation handle from the box edge
    pub handle_offset: f64,
}

/// Builds the primitives for one frame.
///
/// Nothing is produced for a stroke with fewer than two points. With a
/// selection, the stroke is drawn through the live transform and followed by
/// the outline and the rotation handle.
pub fn build_primitives(
    stroke: &Stroke,
    selection: Option<&SelectionView>,
    style: &RenderStyle,
) -> Vec<RenderPrimitive> {
    if !stroke.is_drawable() {
        return Vec::new();
    }

    let points = match selection {
        Some(view) if !util::is_identity(view.transform) => stroke
            .points()
            .iter()
            .map(|&p| util::apply_transform(p, view.transform, view.pivot))
            .collect(),
        _ => stroke.points().to_vec(),
    };

    let mut primitives = vec![RenderPrimitive::Polyline {
        points,
        color: style.stroke_color,
        width: style.stroke_width,
    }];

    if let Some(view) = selection {
        let bbox = stroke.bounding_box();
        let corners = util::bounding_corners(bbox)
            .map(|corner| util::apply_transform(corner, view.transform, view.pivot));

        primitives.push(RenderPrimitive::Outline {
            corners,
            color: style.accent_color,
            width: style.accent_width,
        });
        primitives.push(RenderPrimitive::Handle {
            center: util::rotation_handle_position(
                bbox,
                view.transform,
                view.pivot,
                view.handle_offset,
            ),
            radius: style.handle_radius,
            color: style.accent_color,
        });
    }

    primitives
}
