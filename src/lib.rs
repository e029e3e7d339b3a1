//! Library exports for the sketchpad editor core.
//!
//! Exposes the stroke model, the pointer-driven selection/transform state
//! machine and the frame primitives so that any windowing backend can host the
//! editor, alongside the configuration and script-replay support used by the
//! bundled binary.

pub mod config;
pub mod draw;
pub mod input;
pub mod script;
pub mod util;

pub use config::Config;
