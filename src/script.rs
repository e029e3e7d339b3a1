//! Recorded pointer sessions that can be replayed into an [`InputState`].
//!
//! A script is a TOML document listing events in order:
//!
//! ```toml
//! [[events]]
//! kind = "down"
//! x = 0.0
//! y = 0.0
//!
//! [[events]]
//! kind = "move"
//! x = 10.0
//! y = 0.0
//!
//! [[events]]
//! kind = "up"
//!
//! [[events]]
//! kind = "mode"
//! mode = "selecting"
//! ```
//!
//! `pointer` may be given on `down`/`move`/`up` to simulate extra fingers; it
//! defaults to the primary pointer.

use crate::input::{InputState, Mode, PointerEvent, PointerId};
use anyhow::{Context, Result};
use kurbo::Point;
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors produced while reading a script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("invalid script: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("script contains no events")]
    Empty,
}

/// One step of a recorded session.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ScriptEvent {
    Down {
        x: f64,
        y: f64,
        #[serde(default)]
        pointer: u32,
    },
    Move {
        x: f64,
        y: f64,
        #[serde(default)]
        pointer: u32,
    },
    Up {
        #[serde(default)]
        pointer: u32,
    },
    Mode {
        mode: Mode,
    },
    Clear,
}

/// An ordered list of events.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EventScript {
    pub events: Vec<ScriptEvent>,
}

impl EventScript {
    /// Parses a script from TOML text.
    pub fn parse(text: &str) -> Result<Self, ScriptError> {
        let script: EventScript = toml::from_str(text)?;
        if script.events.is_empty() {
            return Err(ScriptError::Empty);
        }
        Ok(script)
    }

    /// Reads and parses a script file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read script from {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Failed to load script {}", path.display()))
    }

    /// Feeds every event into `state` in order.
    pub fn replay(&self, state: &mut InputState) {
        for event in &self.events {
            debug!("Replaying {:?}", event);
            match *event {
                ScriptEvent::Down { x, y, pointer } => state.handle_event(PointerEvent::Down {
                    pointer: PointerId(pointer),
                    position: Point::new(x, y),
                }),
                ScriptEvent::Move { x, y, pointer } => state.handle_event(PointerEvent::Move {
                    pointer: PointerId(pointer),
                    position: Point::new(x, y),
                }),
                ScriptEvent::Up { pointer } => state.handle_event(PointerEvent::Up {
                    pointer: PointerId(pointer),
                }),
                ScriptEvent::Mode { mode } => state.set_mode(mode),
                ScriptEvent::Clear => state.clear(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRANSLATE: &str = r#"
        [[events]]
        kind = "down"
        x = 0.0
        y = 0.0

        [[events]]
        kind = "move"
        x = 10.0
        y = 0.0

        [[events]]
        kind = "move"
        x = 10.0
        y = 10.0

        [[events]]
        kind = "up"

        [[events]]
        kind = "mode"
        mode = "selecting"

        [[events]]
        kind = "down"
        x = 10.0
        y = 0.0

        [[events]]
        kind = "up"

        [[events]]
        kind = "down"
        x = 5.0
        y = 5.0

        [[events]]
        kind = "move"
        x = 10.0
        y = 5.0

        [[events]]
        kind = "up"
    "#;

    #[test]
    fn parses_all_event_kinds() {
        let script = EventScript::parse(
            r#"
            [[events]]
            kind = "down"
            x = 1.0
            y = 2.0
            pointer = 3

            [[events]]
            kind = "clear"
            "#,
        )
        .unwrap();
        assert_eq!(
            script.events,
            vec![
                ScriptEvent::Down {
                    x: 1.0,
                    y: 2.0,
                    pointer: 3
                },
                ScriptEvent::Clear,
            ]
        );
    }

    #[test]
    fn replay_draws_selects_and_translates() {
        let script = EventScript::parse(TRANSLATE).unwrap();
        let mut state = InputState::default();
        script.replay(&mut state);

        assert_eq!(state.mode(), Mode::Selecting);
        assert!(state.is_selected());
        assert_eq!(
            state.stroke().points(),
            &[
                Point::new(5.0, 0.0),
                Point::new(15.0, 0.0),
                Point::new(15.0, 10.0)
            ]
        );
    }

    #[test]
    fn empty_script_is_rejected() {
        assert!(matches!(
            EventScript::parse("events = []"),
            Err(ScriptError::Empty)
        ));
    }

    #[test]
    fn unknown_kind_is_a_parse_error() {
        let err = EventScript::parse("[[events]]\nkind = \"pinch\"\n").unwrap_err();
        assert!(matches!(err, ScriptError::Parse(_)));
    }
}
