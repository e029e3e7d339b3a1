//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::RenderStyle;
use crate::input::InteractionSettings;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Pointer interaction settings.
///
/// The defaults are tuned for touch input; smaller values suit a mouse.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct InteractionConfig {
    /// A tap closer than this to any stroke point selects the stroke (valid range: 1.0 - 100.0)
    #[serde(default = "default_select_radius")]
    pub select_radius: f64,

    /// A press closer than this to the rotation handle starts a rotation (valid range: 1.0 - 100.0)
    #[serde(default = "default_handle_hit_radius")]
    pub handle_hit_radius: f64,

    /// Distance of the rotation handle outside the selection box (valid range: 0.0 - 200.0)
    #[serde(default = "default_handle_offset")]
    pub handle_offset: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            select_radius: default_select_radius(),
            handle_hit_radius: default_handle_hit_radius(),
            handle_offset: default_handle_offset(),
        }
    }
}

impl InteractionConfig {
    pub fn to_settings(&self) -> InteractionSettings {
        InteractionSettings {
            select_radius: self.select_radius,
            handle_hit_radius: self.handle_hit_radius,
            handle_offset: self.handle_offset,
        }
    }
}

/// Stroke and selection appearance.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct StyleConfig {
    /// Stroke color - a named color or an RGB array like `[0, 0, 0]`
    #[serde(default = "default_stroke_color")]
    pub stroke_color: ColorSpec,

    /// Stroke width in pixels (valid range: 0.5 - 20.0)
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,

    /// Color of the selection outline and rotation handle
    #[serde(default = "default_accent_color")]
    pub accent_color: ColorSpec,

    /// Selection outline width in pixels (valid range: 0.5 - 20.0)
    #[serde(default = "default_accent_width")]
    pub accent_width: f64,

    /// Rotation handle radius in pixels (valid range: 2.0 - 50.0)
    #[serde(default = "default_handle_radius")]
    pub handle_radius: f64,

    /// Canvas background color used when rendering to an image
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            stroke_color: default_stroke_color(),
            stroke_width: default_stroke_width(),
            accent_color: default_accent_color(),
            accent_width: default_accent_width(),
            handle_radius: default_handle_radius(),
            background: default_background(),
        }
    }
}

impl StyleConfig {
    pub fn to_render_style(&self) -> RenderStyle {
        RenderStyle {
            stroke_color: self.stroke_color.to_color(),
            stroke_width: self.stroke_width,
            accent_color: self.accent_color.to_color(),
            accent_width: self.accent_width,
            handle_radius: self.handle_radius,
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_select_radius() -> f64 {
    15.0
}

fn default_handle_hit_radius() -> f64 {
    20.0
}

fn default_handle_offset() -> f64 {
    30.0
}

fn default_stroke_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_stroke_width() -> f64 {
    2.0
}

fn default_accent_color() -> ColorSpec {
    ColorSpec::Rgb([0, 122, 255])
}

fn default_accent_width() -> f64 {
    1.0
}

fn default_handle_radius() -> f64 {
    12.0
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}
