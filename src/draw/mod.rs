//! Stroke storage, frame primitives and Cairo rendering.
//!
//! This module defines the drawing types used by the sketch editor:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Stroke`]: The single freehand line being edited
//! - [`RenderPrimitive`]: Display items produced once per frame
//! - Rendering functions for Cairo-based output

pub mod color;
pub mod primitives;
pub mod render;
pub mod stroke;

// Re-export commonly used types at module level
pub use color::Color;
pub use primitives::{RenderPrimitive, RenderStyle, SelectionView, build_primitives};
pub use render::{render_background, render_primitive, render_primitives, write_png};
pub use stroke::Stroke;

pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, SYSTEM_BLUE, WHITE, YELLOW};
