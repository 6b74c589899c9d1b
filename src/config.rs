// Copyright 2025 the Bezier Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Editor configuration loaded from TOML.
//!
//! Every field is optional; anything left out falls back to the defaults in
//! `settings.rs`. A minimal config file looks like:
//!
//! ```toml
//! sensitivity = 0.05
//! step_count = 200
//! seed_points = [[-0.8, 0.0], [0.0, 0.8], [0.8, 0.0]]
//!
//! [viewport]
//! width = 1024
//! height = 768
//! ```

use crate::error::EditError;
use crate::model::{CurveModel, ScenePoint};
use crate::render::DrawStyle;
use crate::settings;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Overridable editor settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Hit-test radius in scene units
    pub sensitivity: f64,

    /// Number of sampling intervals along the curve
    pub step_count: u32,

    /// Initial viewport size in device pixels
    pub viewport: ViewportConfig,

    /// Control points the editor starts with
    pub seed_points: Vec<SeedPoint>,

    /// Stroke and marker sizes passed to the renderer
    pub style: DrawStyle,
}

/// Viewport size in device pixels
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewportConfig {
    pub width: f64,
    pub height: f64,
}

/// A seed control point written as `[x, y]` or `[x, y, z]`
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SeedPoint {
    Planar([f64; 2]),
    Spatial([f64; 3]),
}

impl From<SeedPoint> for ScenePoint {
    fn from(seed: SeedPoint) -> Self {
        match seed {
            SeedPoint::Planar([x, y]) => ScenePoint::new(x, y, 0.0),
            SeedPoint::Spatial(xyz) => ScenePoint::from(xyz),
        }
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: settings::viewport::WIDTH,
            height: settings::viewport::HEIGHT,
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            sensitivity: settings::hit_test::SENSITIVITY,
            step_count: settings::curve::STEP_COUNT,
            viewport: ViewportConfig::default(),
            seed_points: settings::curve::SEED_POINTS
                .iter()
                .map(|&xyz| SeedPoint::Spatial(xyz))
                .collect(),
            style: DrawStyle::default(),
        }
    }
}

impl EditorConfig {
    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        tracing::info!("Loading config: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("Invalid config: {}", path.display()))
    }

    /// Parse and validate config text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("Failed to parse TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the editor cannot work with
    pub fn validate(&self) -> Result<(), EditError> {
        if !(self.sensitivity.is_finite() && self.sensitivity > 0.0) {
            return Err(EditError::InvalidSensitivity(self.sensitivity));
        }
        if self.step_count == 0 {
            return Err(EditError::InvalidStepCount);
        }
        let ViewportConfig { width, height } = self.viewport;
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(EditError::InvalidViewport { width, height });
        }
        Ok(())
    }

    /// Curve model holding the seed points
    pub fn seed_model(&self) -> CurveModel {
        CurveModel::from_points(self.seed_points.iter().copied().map(ScenePoint::from))
    }
}
