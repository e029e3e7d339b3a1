//! Cairo-based rendering of frame primitives.

use super::color::Color;
use super::primitives::RenderPrimitive;
use anyhow::{Context, Result};
use kurbo::Point;
use std::fs::File;
use std::path::Path;

/// Fills the whole canvas with the background color.
///
/// Should be called after clearing the canvas but before rendering primitives.
pub fn render_background(ctx: &cairo::Context, color: Color) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    let _ = ctx.paint(); // Ignore errors - if paint fails, we'll just have an unfilled bg
}

/// Renders all primitives to a Cairo context.
///
/// Primitives are drawn in the order they appear (first = bottom layer).
///
/// # Arguments
/// * `ctx` - Cairo drawing context to render to
/// * `primitives` - Primitives produced for the current frame
pub fn render_primitives(ctx: &cairo::Context, primitives: &[RenderPrimitive]) {
    for primitive in primitives {
        render_primitive(ctx, primitive);
    }
}

/// Renders a single primitive to a Cairo context.
pub fn render_primitive(ctx: &cairo::Context, primitive: &RenderPrimitive) {
    match primitive {
        RenderPrimitive::Polyline {
            points,
            color,
            width,
        } => render_polyline(ctx, points, *color, *width),
        RenderPrimitive::Outline {
            corners,
            color,
            width,
        } => render_outline(ctx, corners, *color, *width),
        RenderPrimitive::Handle {
            center,
            radius,
            color,
        } => render_handle(ctx, *center, *radius, *color),
    }
}

/// Render freehand stroke (polyline through points)
fn render_polyline(ctx: &cairo::Context, points: &[Point], color: Color, width: f64) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };

    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(width);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    ctx.move_to(first.x, first.y);
    for p in rest {
        ctx.line_to(p.x, p.y);
    }

    let _ = ctx.stroke();
}

/// Render the closed selection outline
fn render_outline(ctx: &cairo::Context, corners: &[Point; 4], color: Color, width: f64) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(width);
    ctx.set_line_join(cairo::LineJoin::Miter);

    ctx.move_to(corners[0].x, corners[0].y);
    for corner in &corners[1..] {
        ctx.line_to(corner.x, corner.y);
    }
    ctx.close_path();

    let _ = ctx.stroke();
}

/// Render the filled rotation handle
fn render_handle(ctx: &cairo::Context, center: Point, radius: f64, color: Color) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.new_sub_path();
    ctx.arc(center.x, center.y, radius, 0.0, std::f64::consts::PI * 2.0);
    let _ = ctx.fill();
}

/// Renders one frame onto a fresh image surface and saves it as PNG.
///
/// # Arguments
/// * `path` - Destination file (overwritten if present)
/// * `primitives` - Primitives for the frame
/// * `background` - Canvas fill color
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
///
/// # Errors
/// Returns an error if the surface cannot be created or the file cannot be written.
pub fn write_png(
    path: &Path,
    primitives: &[RenderPrimitive],
    background: Color,
    width: i32,
    height: i32,
) -> Result<()> {
    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)
        .with_context(|| format!("Failed to create {width}x{height} image surface"))?;
    let ctx = cairo::Context::new(&surface).context("Failed to create cairo context")?;

    render_background(&ctx, background);
    render_primitives(&ctx, primitives);
    drop(ctx);

    let mut file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    surface
        .write_to_png(&mut file)
        .with_context(|| format!("Failed to write PNG to {}", path.display()))?;

    log::info!("Saved frame to {}", path.display());
    Ok(())
}
