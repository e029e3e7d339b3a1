//! Editor mode selection.

use serde::Deserialize;

/// What pointer gestures do on the canvas.
///
/// Switching modes always drops the current selection and any live transform;
/// the stroke itself is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Dragging draws a new freehand stroke (default)
    #[default]
    Drawing,
    /// Tapping selects the stroke; dragging moves or rotates it
    Selecting,
}
