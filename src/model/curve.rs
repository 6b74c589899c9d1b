// Copyright 2025 the Bezier Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! The ordered control-point sequence behind the curve.
//!
//! Order is significant: index 0 is the start of the curve and the last
//! index is its end. Indices are contiguous and only shift across an explicit
//! add or remove. Any sampled curve derived from a `CurveModel` is stale as
//! soon as one of the mutating methods returns `Ok`.

use crate::editing::hit_test;
use crate::error::EditError;
use crate::model::ScenePoint;
use kurbo::Point;

/// Owns the control points of the single global curve
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurveModel {
    points: Vec<ScenePoint>,
}

impl CurveModel {
    /// Create an empty model
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a model from an existing ordered point list
    pub fn from_points(points: impl IntoIterator<Item = ScenePoint>) -> Self {
        Self {
            points: points.into_iter().collect(),
        }
    }

    /// Control points in curve order
    pub fn points(&self) -> &[ScenePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<ScenePoint> {
        self.points.get(index).copied()
    }

    /// Index of the first point within `sensitivity` of `query`
    ///
    /// See [`hit_test::nearest_point`] for the exact matching rule.
    pub fn nearest_point(&self, sensitivity: f64, query: Point) -> Option<usize> {
        hit_test::nearest_point(&self.points, sensitivity, query)
    }

    /// Append a control point to the end of the curve
    ///
    /// Returns the index of the new point.
    pub fn add_point(&mut self, position: ScenePoint) -> usize {
        self.points.push(position);
        let index = self.points.len() - 1;
        tracing::debug!(
            "[CurveModel::add_point] index={} pos=({}, {}, {})",
            index,
            position.x,
            position.y,
            position.z
        );
        index
    }

    /// Replace the x and y of the point at `index`; z is left unchanged
    pub fn move_point(&mut self, index: usize, position: Point) -> Result<(), EditError> {
        let len = self.points.len();
        let point = self
            .points
            .get_mut(index)
            .ok_or(EditError::IndexOutOfRange { index, len })?;
        *point = point.with_xy(position);
        Ok(())
    }

    /// Remove the point at `index`, shifting later points down by one
    ///
    /// The last remaining point cannot be removed; the curve always keeps
    /// at least one control point once it has one.
    pub fn remove_point(&mut self, index: usize) -> Result<ScenePoint, EditError> {
        let len = self.points.len();
        if index >= len {
            return Err(EditError::IndexOutOfRange { index, len });
        }
        if len == 1 {
            return Err(EditError::LastPoint);
        }
        let removed = self.points.remove(index);
        tracing::debug!("[CurveModel::remove_point] index={} remaining={}", index, len - 1);
        Ok(removed)
    }
}
