//! Generic pointer event types for cross-backend compatibility.

use kurbo::Point;

/// Identifies one physical pointer (mouse, finger, stylus).
///
/// Only the first pointer to go down is tracked; events from any other
/// pointer are dropped until it is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerId(pub u32);

impl PointerId {
    /// The pointer used by single-pointer backends.
    pub const PRIMARY: PointerId = PointerId(0);
}

/// Pointer input delivered by the backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer pressed / touch began
    Down {
        /// Which pointer went down
        pointer: PointerId,
        /// Position in view coordinates
        position: Point,
    },
    /// Pointer dragged while pressed
    Move {
        /// Which pointer moved
        pointer: PointerId,
        /// Position in view coordinates
        position: Point,
    },
    /// Pointer released / touch ended
    Up {
        /// Which pointer was released
        pointer: PointerId,
    },
}
