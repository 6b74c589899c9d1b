// Copyright 2025 the Bezier Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Errors raised by the editing core.
//!
//! Every variant describes a caller bug or bad configuration rather than a
//! transient condition, so nothing here is retried. Mutations that fail leave
//! the control-point sequence exactly as it was.

use thiserror::Error;

/// Errors returned by curve model, evaluator, and session operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    /// A move or remove addressed a control point that does not exist
    #[error("control point index {index} out of range (curve has {len} points)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Removing this point would leave the curve with no control points
    #[error("cannot remove the last remaining control point")]
    LastPoint,

    /// The viewport must have a positive width and height
    #[error("invalid viewport size {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },

    /// Sampling needs at least one interval
    #[error("step count must be at least 1")]
    InvalidStepCount,

    /// Hit-test radius must be positive and finite
    #[error("invalid sensitivity radius {0}")]
    InvalidSensitivity(f64),
}
