mod core;
mod pointer;
mod render;
mod transform;

pub use self::core::{InputState, InteractionSettings};
pub use transform::{SessionState, TransformSession};
