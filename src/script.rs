// Copyright 2025 the Bezier Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Recorded pointer gestures, replayed through an edit session.
//!
//! A script is a TOML list of `[[event]]` tables in device-pixel
//! coordinates:
//!
//! ```toml
//! [[event]]
//! kind = "press"
//! button = "primary"
//! x = 450.0
//! y = 150.0
//!
//! [[event]]
//! kind = "move"
//! x = 420.0
//! y = 90.0
//!
//! [[event]]
//! kind = "release"
//! button = "primary"
//! ```

use crate::editing::{EditSession, MouseButton, MouseEvent};
use crate::error::EditError;
use crate::render::Renderer;
use anyhow::{Context, Result};
use kurbo::Point;
use serde::Deserialize;
use std::path::Path;

/// One recorded input event
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ScriptEvent {
    Press { button: MouseButton, x: f64, y: f64 },
    Release { button: MouseButton },
    Move { x: f64, y: f64 },
    Resize { width: f64, height: f64 },
}

/// An ordered list of input events
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GestureScript {
    #[serde(default, rename = "event")]
    pub events: Vec<ScriptEvent>,
}

impl GestureScript {
    pub fn load(path: &Path) -> Result<Self> {
        tracing::info!("Loading gesture script: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script: {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("Invalid script: {}", path.display()))
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML")
    }

    /// Feed every event into `session`, stopping at the first error
    pub fn replay<R: Renderer>(&self, session: &mut EditSession<R>) -> Result<(), EditError> {
        for (n, event) in self.events.iter().enumerate() {
            tracing::debug!("[GestureScript::replay] event {}: {:?}", n, event);
            match *event {
                ScriptEvent::Press { button, x, y } => {
                    session.pointer_down(MouseEvent::new(Point::new(x, y), button))?
                }
                ScriptEvent::Release { button } => session.pointer_up(button),
                ScriptEvent::Move { x, y } => session.pointer_move(Point::new(x, y))?,
                ScriptEvent::Resize { width, height } => session.resize(width, height)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;
    use crate::editing::DragState;
    use crate::model::ScenePoint;
    use crate::render::FrameRecorder;

    const DRAG_SCRIPT: &str = r#"
        [[event]]
        kind = "press"
        button = "primary"
        x = 450.0
        y = 150.0

        [[event]]
        kind = "move"
        x = 525.0
        y = 75.0

        [[event]]
        kind = "release"
        button = "primary"

        [[event]]
        kind = "press"
        button = "secondary"
        x = 150.0
        y = 450.0
    "#;

    #[test]
    fn parses_all_event_kinds() {
        let text = r#"
            [[event]]
            kind = "resize"
            width = 800.0
            height = 600.0

            [[event]]
            kind = "press"
            button = "secondary"
            x = 1.0
            y = 2.0
        "#;
        let script = GestureScript::from_toml_str(text).unwrap();
        assert_eq!(
            script.events,
            vec![
                ScriptEvent::Resize {
                    width: 800.0,
                    height: 600.0
                },
                ScriptEvent::Press {
                    button: MouseButton::Secondary,
                    x: 1.0,
                    y: 2.0
                },
            ]
        );
    }

    #[test]
    fn empty_script_has_no_events() {
        assert!(GestureScript::from_toml_str("").unwrap().events.is_empty());
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let text = r#"
            [[event]]
            kind = "scroll"
        "#;
        assert!(GestureScript::from_toml_str(text).is_err());
    }

    #[test]
    fn replay_drags_then_removes() {
        let script = GestureScript::from_toml_str(DRAG_SCRIPT).unwrap();
        let mut session = EditSession::new(&EditorConfig::default(), FrameRecorder::new()).unwrap();
        script.replay(&mut session).unwrap();

        // Point 3 was dragged to (0.75, 0.75), then point 0 was removed
        assert_eq!(
            session.points(),
            &[
                ScenePoint::new(-0.5, 0.5, 0.0),
                ScenePoint::new(0.5, -0.5, 0.0),
                ScenePoint::new(0.75, 0.75, 0.0),
            ]
        );
        assert_eq!(session.drag_state(), DragState::Idle);
        // seed + press + move + remove
        assert_eq!(session.renderer().frames().len(), 4);
    }
}
