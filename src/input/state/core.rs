//! Editor state shared by all pointer handlers.

use super::transform::TransformSession;
use crate::draw::{RenderStyle, Stroke};
use crate::input::{events::PointerId, mode::Mode};
use crate::util;
use kurbo::{Affine, Point};
use log::info;

/// Hit-test distances tuned for touch input.
///
/// Smaller values suit mouse-precision pointers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionSettings {
    /// A tap closer than this to any stroke point selects the stroke
    pub select_radius: f64,
    /// A press closer than this to the rotation handle starts a rotation
    pub handle_hit_radius: f64,
    /// Distance of the rotation handle outside the selection box
    pub handle_offset: f64,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            select_radius: 15.0,
            handle_hit_radius: 20.0,
            handle_offset: 30.0,
        }
    }
}

/// Main input state containing all editing session state.
///
/// This struct owns the stroke, the current mode, the selection flag and the
/// transform session. It processes pointer events to update that state and
/// determines when redraws are needed.
#[derive(Debug)]
pub struct InputState {
    /// The single stroke on the canvas
    pub(super) stroke: Stroke,
    /// Drawing or selecting
    pub(super) mode: Mode,
    /// Whether the stroke is currently selected
    pub(super) selected: bool,
    /// Live translate/rotate of the selected stroke
    pub(super) session: TransformSession,
    /// Pointer that owns the current gesture, if any
    pub(super) active_pointer: Option<PointerId>,
    /// Hit-test distances
    pub settings: InteractionSettings,
    /// Stroke and selection appearance
    pub style: RenderStyle,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self::with_defaults(InteractionSettings::default(), RenderStyle::default())
    }
}

impl InputState {
    /// Creates an empty canvas in drawing mode.
    ///
    /// # Arguments
    /// * `settings` - Hit-test distances
    /// * `style` - Stroke and selection appearance
    pub fn with_defaults(settings: InteractionSettings, style: RenderStyle) -> Self {
        Self {
            stroke: Stroke::new(),
            mode: Mode::Drawing,
            selected: false,
            session: TransformSession::new(),
            active_pointer: None,
            settings,
            style,
            needs_redraw: true,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn stroke(&self) -> &Stroke {
        &self.stroke
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn session(&self) -> &TransformSession {
        &self.session
    }

    /// Live transform of the current gesture (identity when idle).
    pub fn transform(&self) -> Affine {
        self.session.transform()
    }

    /// Centre used for rotations.
    pub fn pivot(&self) -> Point {
        self.session.pivot()
    }

    /// Pointer currently driving a gesture, if any.
    pub fn active_pointer(&self) -> Option<PointerId> {
        self.active_pointer
    }

    /// Where the rotation handle is drawn, following the live transform.
    pub fn rotation_handle(&self) -> Point {
        util::rotation_handle_position(
            self.stroke.bounding_box(),
            self.session.transform(),
            self.session.pivot(),
            self.settings.handle_offset,
        )
    }

    /// Switches between drawing and selecting.
    ///
    /// Always drops the selection, the live transform and any gesture in
    /// progress, even when `mode` equals the current mode. The stroke points
    /// are left unchanged.
    pub fn set_mode(&mut self, mode: Mode) {
        let previous = self.mode;
        self.mode = mode;
        self.selected = false;
        self.session.reset();
        self.active_pointer = None;
        self.needs_redraw = true;

        info!("Switched from {:?} to {:?} mode", previous, mode);
    }

    /// Removes the stroke and drops the selection and any gesture in progress.
    pub fn clear(&mut self) {
        self.stroke.clear();
        self.selected = false;
        self.session.reset();
        self.active_pointer = None;
        self.needs_redraw = true;

        info!("Canvas cleared");
    }

    /// Re-centres the pivot on the stroke's bounding box.
    pub(super) fn recompute_pivot(&mut self) {
        let center = self.stroke.bounding_box().center();
        self.session.set_pivot(center);
    }
}
