// Copyright 2025 the Bezier Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Hand-off to the rendering collaborator.
//!
//! Each edit produces one `RenderFrame`: a contiguous vec3 vertex buffer
//! holding the sampled curve followed by the raw control points. The renderer
//! draws a line strip over `vertices[..split]` and point markers over
//! `vertices[split..]`. Window, shader, and GPU buffer management live
//! entirely behind the `Renderer` trait.

use crate::curve::SampledCurve;
use crate::model::ScenePoint;
use crate::settings;
use serde::Deserialize;

/// Stroke and marker sizes for the two draw calls
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DrawStyle {
    pub line_width: f32,
    pub point_size: f32,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            line_width: settings::style::LINE_WIDTH,
            point_size: settings::style::POINT_SIZE,
        }
    }
}

/// One frame's worth of vertex data
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderFrame {
    vertices: Vec<[f32; 3]>,
    control_point_count: usize,
    style: DrawStyle,
}

impl RenderFrame {
    /// Build the buffer: curve samples first, control-point markers last
    pub fn new(curve: &SampledCurve, control_points: &[ScenePoint], style: DrawStyle) -> Self {
        let vertices = curve
            .samples()
            .iter()
            .chain(control_points)
            .map(|pt| pt.to_vertex())
            .collect();

        Self {
            vertices,
            control_point_count: control_points.len(),
            style,
        }
    }

    /// The full vertex buffer to upload
    pub fn vertices(&self) -> &[[f32; 3]] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn control_point_count(&self) -> usize {
        self.control_point_count
    }

    /// First marker vertex; everything before it belongs to the curve stroke
    pub fn split(&self) -> usize {
        self.vertices.len() - self.control_point_count
    }

    /// Vertices for the line-strip draw
    pub fn curve_vertices(&self) -> &[[f32; 3]] {
        &self.vertices[..self.split()]
    }

    /// Vertices for the points draw
    pub fn marker_vertices(&self) -> &[[f32; 3]] {
        &self.vertices[self.split()..]
    }

    pub fn style(&self) -> DrawStyle {
        self.style
    }
}

/// Receives a fresh frame after every edit that changed the curve
pub trait Renderer {
    fn present(&mut self, frame: &RenderFrame);
}

/// Renderer that only reports frames through `tracing`
#[derive(Debug, Default)]
pub struct FrameLog {
    frames: usize,
}

impl FrameLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames presented so far
    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl Renderer for FrameLog {
    fn present(&mut self, frame: &RenderFrame) {
        self.frames += 1;
        tracing::info!(
            "frame {}: {} curve vertices, {} markers",
            self.frames,
            frame.split(),
            frame.control_point_count()
        );
    }
}

/// Renderer that keeps a copy of every frame
#[derive(Debug, Default)]
pub struct FrameRecorder {
    frames: Vec<RenderFrame>,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[RenderFrame] {
        &self.frames
    }

    pub fn last(&self) -> Option<&RenderFrame> {
        self.frames.last()
    }
}

impl Renderer for FrameRecorder {
    fn present(&mut self, frame: &RenderFrame) {
        self.frames.push(frame.clone());
    }
}
