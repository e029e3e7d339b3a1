//! Interactive translate/rotate of the selected stroke.

use crate::draw::Stroke;
use crate::util;
use kurbo::{Affine, Point};
use log::{debug, warn};

/// Gesture phase of a [`TransformSession`].
///
/// The start point only exists while a drag is in progress, so a rotation can
/// never be "active" without knowing where it began.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionState {
    /// No drag in progress
    Idle,
    /// Dragging inside the selection box
    Translating {
        /// Where the drag began
        start: Point,
    },
    /// Dragging the rotation handle
    Rotating {
        /// Where the drag began
        start: Point,
    },
}

/// Tracks a live transform from pointer-down to pointer-up.
///
/// While a drag is active the stroke is left untouched and only the live
/// [`transform`](Self::transform) changes; [`finish`](Self::finish) bakes it
/// into the stroke points and returns to identity.
#[derive(Debug, Clone)]
pub struct TransformSession {
    state: SessionState,
    transform: Affine,
    pivot: Point,
}

impl Default for TransformSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
            transform: Affine::IDENTITY,
            pivot: Point::ZERO,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Live transform; identity whenever no drag is in progress.
    pub fn transform(&self) -> Affine {
        self.transform
    }

    pub fn pivot(&self) -> Point {
        self.pivot
    }

    /// Returns true while a translate or rotate drag is in progress.
    pub fn is_active(&self) -> bool {
        !matches!(self.state, SessionState::Idle)
    }

    /// Sets the rotation centre. Ignored mid-drag.
    pub fn set_pivot(&mut self, pivot: Point) {
        if self.is_active() {
            warn!("Ignoring pivot change during an active transform");
            return;
        }
        self.pivot = pivot;
    }

    /// Starts a translate drag at `start`.
    pub fn begin_translate(&mut self, start: Point) {
        self.begin(SessionState::Translating { start });
    }

    /// Starts a rotate drag at `start`.
    pub fn begin_rotate(&mut self, start: Point) {
        self.begin(SessionState::Rotating { start });
    }

    fn begin(&mut self, state: SessionState) {
        if self.is_active() {
            warn!("Transform already in progress; ignoring {:?}", state);
            return;
        }
        debug!("Transform began: {:?} (pivot {:?})", state, self.pivot);
        self.state = state;
    }

    /// Recomputes the live transform from the drag start and `current`.
    ///
    /// Translation follows the pointer delta. Rotation is the change in angle
    /// of the pointer as seen from the pivot. Does nothing while idle.
    pub fn update(&mut self, current: Point) {
        self.transform = match self.state {
            SessionState::Idle => return,
            SessionState::Translating { start } => util::translation(current - start),
            SessionState::Rotating { start } => util::rotation(
                util::angle_about(current, self.pivot) - util::angle_about(start, self.pivot),
            ),
        };
    }

    /// Ends the drag, committing a non-identity transform into `stroke`.
    ///
    /// Returns true if the stroke points were replaced. The session is idle
    /// afterwards either way.
    pub fn finish(&mut self, stroke: &mut Stroke) -> bool {
        self.state = SessionState::Idle;

        if util::is_identity(self.transform) {
            return false;
        }

        let committed = stroke
            .points()
            .iter()
            .map(|&p| util::apply_transform(p, self.transform, self.pivot))
            .collect();
        stroke.replace_points(committed);
        self.transform = Affine::IDENTITY;
        true
    }

    /// Drops any drag in progress without touching the stroke.
    pub fn reset(&mut self) {
        self.state = SessionState::Idle;
        self.transform = Affine::IDENTITY;
    }
}
