// Copyright 2025 the Bezier Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Default settings for the editor.
//!
//! These are the values used when no config file is given, or when a config
//! file leaves a field out. See `config.rs` for the overridable layer.

// ============================================================================
// HIT TESTING
// ============================================================================
/// Radius around a control point that counts as a hit (scene units)
const HIT_SENSITIVITY: f64 = 0.1;

// ============================================================================
// CURVE SAMPLING
// ============================================================================
/// Number of intervals the curve is split into (samples = steps + 1)
const CURVE_STEP_COUNT: u32 = 100;

// ============================================================================
// VIEWPORT
// ============================================================================
/// Initial viewport width (device pixels)
const VIEWPORT_WIDTH: f64 = 600.0;

/// Initial viewport height (device pixels)
const VIEWPORT_HEIGHT: f64 = 600.0;

// ============================================================================
// DRAW STYLE
// ============================================================================
/// Stroke width for the curve polyline (pixels)
const LINE_WIDTH: f32 = 2.0;

/// Marker size for control points (pixels)
const POINT_SIZE: f32 = 7.0;

// ============================================================================
// SEED CURVE
// ============================================================================
/// Control points the editor starts with
const SEED_POINTS: [[f64; 3]; 4] = [
    [-0.5, -0.5, 0.0],
    [-0.5, 0.5, 0.0],
    [0.5, -0.5, 0.0],
    [0.5, 0.5, 0.0],
];

// ============================================================================
// PUBLIC API
// ============================================================================

/// Hit-testing settings
pub mod hit_test {
    /// Default sensitivity radius in normalized scene units
    pub const SENSITIVITY: f64 = super::HIT_SENSITIVITY;
}

/// Curve sampling settings
pub mod curve {
    /// Default number of sampling intervals
    pub const STEP_COUNT: u32 = super::CURVE_STEP_COUNT;

    /// Default seed control points
    pub const SEED_POINTS: [[f64; 3]; 4] = super::SEED_POINTS;
}

/// Viewport settings
pub mod viewport {
    pub const WIDTH: f64 = super::VIEWPORT_WIDTH;
    pub const HEIGHT: f64 = super::VIEWPORT_HEIGHT;
}

/// Draw style handed to the renderer with each frame
pub mod style {
    pub const LINE_WIDTH: f32 = super::LINE_WIDTH;
    pub const POINT_SIZE: f32 = super::POINT_SIZE;
}
