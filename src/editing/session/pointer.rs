// Copyright 2025 the Bezier Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer event handlers for EditSession
//!
//! States are `Idle` and `Dragging(index)`. A primary press grabs the point
//! under the pointer or appends a new one, moves drag the grabbed point, and
//! a primary release always returns to `Idle`. A secondary press removes
//! the point under the pointer.

use super::EditSession;
use crate::editing::mouse::{DragState, MouseButton, MouseEvent};
use crate::error::EditError;
use crate::render::Renderer;
use kurbo::Point;

impl<R: Renderer> EditSession<R> {
    // ============================================================================
    // POINTER EVENT HANDLERS
    // ============================================================================

    /// Handle a button press at a device-pixel position
    pub fn pointer_down(&mut self, event: MouseEvent) -> Result<(), EditError> {
        let scene_pos = self.viewport.to_scene(event.pos);

        tracing::debug!(
            "[EditSession::pointer_down] {:?} at device=({}, {}) scene=({}, {})",
            event.button,
            event.pos.x,
            event.pos.y,
            scene_pos.x,
            scene_pos.y
        );

        match event.button {
            MouseButton::Primary => self.handle_primary_down(scene_pos),
            MouseButton::Secondary => self.handle_secondary_down(scene_pos),
        }
    }

    /// Handle pointer motion; only has an effect while dragging
    pub fn pointer_move(&mut self, device_pos: Point) -> Result<(), EditError> {
        let DragState::Dragging { index } = self.drag else {
            return Ok(());
        };

        let scene_pos = self.viewport.to_scene(device_pos);
        self.move_point(index, scene_pos)
    }

    /// Handle a button release
    pub fn pointer_up(&mut self, button: MouseButton) {
        if button == MouseButton::Primary {
            if let DragState::Dragging { index } = self.drag {
                tracing::debug!("[EditSession::pointer_up] released point {}", index);
            }
            self.drag = DragState::Idle;
        }
    }

    // ===== PRIVATE HELPERS =====

    /// Grab the point under the pointer, or append a new one there
    fn handle_primary_down(&mut self, scene_pos: Point) -> Result<(), EditError> {
        match self.model.nearest_point(self.sensitivity, scene_pos) {
            Some(index) => {
                tracing::debug!("[EditSession::pointer_down] grabbed point {}", index);
                self.drag = DragState::Dragging { index };
                self.publish()
            }
            None => {
                self.drag = DragState::Idle;
                self.add_point(scene_pos).map(|_| ())
            }
        }
    }

    /// Remove the point under the pointer, if any
    fn handle_secondary_down(&mut self, scene_pos: Point) -> Result<(), EditError> {
        let Some(index) = self.model.nearest_point(self.sensitivity, scene_pos) else {
            tracing::debug!("[EditSession::pointer_down] no point to remove");
            return Ok(());
        };

        match self.remove_point(index) {
            Ok(_) => Ok(()),
            Err(EditError::LastPoint) => {
                tracing::warn!("Ignoring removal of the last control point");
                Ok(())
            }
            Err(err) => Err(err),
        }
    }
}
