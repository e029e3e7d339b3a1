//! Configuration file support for sketchpad.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/sketchpad/config.toml`. Settings cover pointer hit-test
//! distances and the stroke/selection appearance.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{InteractionConfig, StyleConfig};

use crate::draw::RenderStyle;
use crate::input::{InputState, InteractionSettings};
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [interaction]
/// select_radius = 15.0
/// handle_hit_radius = 20.0
/// handle_offset = 30.0
///
/// [style]
/// stroke_color = "black"
/// stroke_width = 2.0
/// accent_color = [0, 122, 255]
/// handle_radius = 12.0
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Pointer hit-test distances
    #[serde(default)]
    pub interaction: InteractionConfig,

    /// Stroke and selection appearance
    #[serde(default)]
    pub style: StyleConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    /// Non-finite values (NaN, infinity) are replaced with the field's default.
    ///
    /// Validated ranges:
    /// - `select_radius`: 1.0 - 100.0
    /// - `handle_hit_radius`: 1.0 - 100.0
    /// - `handle_offset`: 0.0 - 200.0
    /// - `stroke_width`, `accent_width`: 0.5 - 20.0
    /// - `handle_radius`: 2.0 - 50.0
    fn validate_and_clamp(&mut self) {
        let interaction = InteractionConfig::default();
        let style = StyleConfig::default();

        clamp_setting(
            "select_radius",
            &mut self.interaction.select_radius,
            1.0,
            100.0,
            interaction.select_radius,
        );
        clamp_setting(
            "handle_hit_radius",
            &mut self.interaction.handle_hit_radius,
            1.0,
            100.0,
            interaction.handle_hit_radius,
        );
        clamp_setting(
            "handle_offset",
            &mut self.interaction.handle_offset,
            0.0,
            200.0,
            interaction.handle_offset,
        );
        clamp_setting(
            "stroke_width",
            &mut self.style.stroke_width,
            0.5,
            20.0,
            style.stroke_width,
        );
        clamp_setting(
            "accent_width",
            &mut self.style.accent_width,
            0.5,
            20.0,
            style.accent_width,
        );
        clamp_setting(
            "handle_radius",
            &mut self.style.handle_radius,
            2.0,
            50.0,
            style.handle_radius,
        );

        // Colors: unknown names fall back to black at conversion time
        for (key, spec) in [
            ("stroke_color", &self.style.stroke_color),
            ("accent_color", &self.style.accent_color),
            ("background", &self.style.background),
        ] {
            if !spec.is_known() {
                log::warn!("Unknown color {:?} for {}, black will be used", spec, key);
            }
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/sketchpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(text)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// Returns the JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    pub fn interaction_settings(&self) -> InteractionSettings {
        self.interaction.to_settings()
    }

    pub fn render_style(&self) -> RenderStyle {
        self.style.to_render_style()
    }

    /// Builds an empty editor using these settings.
    pub fn build_input_state(&self) -> InputState {
        InputState::with_defaults(self.interaction_settings(), self.render_style())
    }
}

fn clamp_setting(key: &str, value: &mut f64, min: f64, max: f64, default: f64) {
    if !value.is_finite() {
        log::warn!("Invalid {} {}, using default {:.1}", key, value, default);
        *value = default;
        return;
    }
    if !(min..=max).contains(&*value) {
        log::warn!(
            "Invalid {} {:.1}, clamping to {:.1}-{:.1} range",
            key,
            value,
            min,
            max
        );
        *value = (*value).clamp(min, max);
    }
}
