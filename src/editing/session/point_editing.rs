// Copyright 2025 the Bezier Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Point editing methods for EditSession
//!
//! Each successful edit republishes the full curve. Failed edits leave both
//! the model and the last frame untouched.

use super::EditSession;
use crate::editing::mouse::DragState;
use crate::error::EditError;
use crate::model::ScenePoint;
use crate::render::Renderer;
use kurbo::Point;

impl<R: Renderer> EditSession<R> {
    /// Append a control point at a scene position (z = 0)
    ///
    /// Returns the index of the new point.
    pub fn add_point(&mut self, scene_pos: Point) -> Result<usize, EditError> {
        let index = self.model.add_point(ScenePoint::on_plane(scene_pos));
        self.publish()?;
        Ok(index)
    }

    /// Move the point at `index` to a scene position
    pub fn move_point(&mut self, index: usize, scene_pos: Point) -> Result<(), EditError> {
        self.model
            .move_point(index, scene_pos)
            .inspect_err(|err| tracing::error!("Rejected move: {}", err))?;
        self.publish()
    }

    /// Remove the point at `index`
    ///
    /// A drag in progress is cancelled when its point is the one removed or
    /// sits after it, since its index would no longer name the same point.
    pub fn remove_point(&mut self, index: usize) -> Result<ScenePoint, EditError> {
        let removed = self.model.remove_point(index).inspect_err(|err| {
            if *err != EditError::LastPoint {
                tracing::error!("Rejected remove: {}", err);
            }
        })?;

        if let DragState::Dragging { index: dragged } = self.drag {
            if dragged >= index {
                tracing::debug!(
                    "[EditSession::remove_point] cancelling drag of point {}",
                    dragged
                );
                self.drag = DragState::Idle;
            }
        }

        self.publish()?;
        Ok(removed)
    }
}
