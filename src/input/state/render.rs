use crate::draw::{RenderPrimitive, SelectionView, build_primitives};

use super::InputState;

impl InputState {
    /// Returns what the renderer should paint for the current frame.
    ///
    /// The live transform only affects the output while the stroke is
    /// selected. An empty or single-point stroke yields no primitives.
    pub fn render_primitives(&self) -> Vec<RenderPrimitive> {
        let selection = self.selected.then(|| SelectionView {
            transform: self.session.transform(),
            pivot: self.session.pivot(),
            handle_offset: self.settings.handle_offset,
        });

        build_primitives(&self.stroke, selection.as_ref(), &self.style)
    }

    /// Returns true (and resets the flag) if state changed since the last frame.
    pub fn take_needs_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }
}
