//! Pointer handling and the selection/transform state machine.
//!
//! This module turns backend pointer events into stroke edits. It owns the
//! current mode (drawing or selecting), the stroke, the selection flag and
//! the transform session used while a selected stroke is dragged or rotated.

pub mod events;
pub mod mode;
pub mod state;

// Re-export commonly used types at module level
pub use events::{PointerEvent, PointerId};
pub use mode::Mode;
pub use state::{InputState, InteractionSettings, SessionState, TransformSession};
