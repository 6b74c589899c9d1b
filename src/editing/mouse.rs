// Copyright 2025 the Bezier Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer input types and the drag gesture state

use kurbo::Point;
use serde::Deserialize;

/// Mouse buttons the editor reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    /// Adds or grabs points
    Primary,
    /// Removes points
    Secondary,
}

/// A pointer press or release in device-pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseEvent {
    pub pos: Point,
    pub button: MouseButton,
}

impl MouseEvent {
    pub fn new(pos: Point, button: MouseButton) -> Self {
        Self { pos, button }
    }
}

/// Press-drag-release gesture state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No point grabbed
    #[default]
    Idle,
    /// The control point at `index` follows the pointer
    Dragging { index: usize },
}

impl DragState {
    /// Index of the grabbed point, if any
    pub fn index(self) -> Option<usize> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { index } => Some(index),
        }
    }

    pub fn is_dragging(self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }
}
