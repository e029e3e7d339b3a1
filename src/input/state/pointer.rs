use crate::draw::Stroke;
use crate::input::{
    events::{PointerEvent, PointerId},
    mode::Mode,
};
use crate::util;
use kurbo::Point;
use log::{debug, info};

use super::InputState;

impl InputState {
    /// Dispatches a backend pointer event to the matching handler.
    pub fn handle_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { pointer, position } => self.on_pointer_down(pointer, position),
            PointerEvent::Move { pointer, position } => self.on_pointer_move(pointer, position),
            PointerEvent::Up { pointer } => self.on_pointer_up(pointer),
        }
    }

    /// Processes a pointer press.
    ///
    /// # Behavior
    /// - Drawing mode: starts a new stroke at `point`, replacing the old one
    /// - Selecting mode with a selection: a press on the rotation handle starts
    ///   a rotation, a press inside the selection box starts a translation
    /// - Otherwise: selects the stroke if any of its points is within the
    ///   selection radius, deselects it if not
    ///
    /// Presses from a second pointer while one is already down are ignored.
    /// A repeated press from the active pointer (its release was lost) ends
    /// the stale gesture without committing it and starts a new one.
    pub fn on_pointer_down(&mut self, pointer: PointerId, point: Point) {
        match self.active_pointer {
            Some(active) if active != pointer => {
                debug!(
                    "Ignoring press from {:?}; {:?} is already down",
                    pointer, active
                );
                return;
            }
            Some(active) => {
                debug!("{:?} pressed again without a release, restarting gesture", active);
                self.session.reset();
            }
            None => {}
        }
        self.active_pointer = Some(pointer);

        match self.mode {
            Mode::Drawing => {
                self.stroke = Stroke::starting_at(point);
                self.needs_redraw = true;
            }
            Mode::Selecting => self.press_in_selecting_mode(point),
        }
    }

    fn press_in_selecting_mode(&mut self, point: Point) {
        if self.selected {
            // The stroke may have moved since the last commit.
            self.recompute_pivot();

            if util::distance(point, self.rotation_handle()) < self.settings.handle_hit_radius {
                self.session.begin_rotate(point);
                return;
            }
            if util::rect_contains(self.stroke.bounding_box(), point) {
                self.session.begin_translate(point);
                return;
            }
        }

        let was_selected = self.selected;
        self.selected = self.stroke.hit_test(point, self.settings.select_radius);
        if self.selected {
            self.recompute_pivot();
        }
        if was_selected != self.selected {
            debug!(
                "Stroke {} at ({:.1}, {:.1})",
                if self.selected { "selected" } else { "deselected" },
                point.x,
                point.y
            );
        }
        self.needs_redraw = true;
    }

    /// Processes pointer motion while pressed.
    ///
    /// # Behavior
    /// - Drawing mode: appends `point` to the stroke
    /// - Selecting mode: updates the live transform if a drag is in progress
    pub fn on_pointer_move(&mut self, pointer: PointerId, point: Point) {
        if self.active_pointer != Some(pointer) {
            debug!("Ignoring motion from inactive {:?}", pointer);
            return;
        }

        match self.mode {
            Mode::Drawing => {
                self.stroke.append(point);
                self.needs_redraw = true;
            }
            Mode::Selecting => {
                if self.selected && self.session.is_active() {
                    self.session.update(point);
                    self.needs_redraw = true;
                }
            }
        }
    }

    /// Processes a pointer release.
    ///
    /// # Behavior
    /// - Drawing mode: ends the stroke (its points are already stored)
    /// - Selecting mode: commits a non-identity live transform into the stroke
    pub fn on_pointer_up(&mut self, pointer: PointerId) {
        if self.active_pointer != Some(pointer) {
            debug!("Ignoring release from inactive {:?}", pointer);
            return;
        }
        self.active_pointer = None;

        if self.mode != Mode::Selecting {
            return;
        }

        if !self.selected {
            debug!("Release without a selection, nothing to commit");
            self.session.reset();
            return;
        }

        let transform = self.session.transform();
        if self.session.finish(&mut self.stroke) {
            info!(
                "Committed transform {:?} to {} points",
                transform.as_coeffs(),
                self.stroke.len()
            );
        }
        self.needs_redraw = true;
    }
}
