// Copyright 2025 the Bezier Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Edit session - owns all editing state for the curve
//!
//! The session replaces ambient globals with one explicit state struct: the
//! control points, the drag gesture, the viewport, and the last published
//! frame all live here. Every event is handled to completion: mutate the
//! model, re-evaluate the whole curve, hand the frame to the renderer.

mod point_editing;
mod pointer;

use super::mouse::DragState;
use super::viewport::ViewPort;
use crate::config::EditorConfig;
use crate::curve::evaluate;
use crate::error::EditError;
use crate::model::{CurveModel, ScenePoint};
use crate::render::{DrawStyle, RenderFrame, Renderer};

/// Editing session for the single global curve
#[derive(Debug)]
pub struct EditSession<R> {
    /// Control points, in curve order
    model: CurveModel,

    /// Current press-drag-release gesture
    drag: DragState,

    /// Viewport used to normalize device coordinates
    viewport: ViewPort,

    /// Hit-test radius in scene units
    sensitivity: f64,

    /// Sampling intervals per evaluation
    step_count: u32,

    /// Style attached to each frame
    style: DrawStyle,

    /// Last frame handed to the renderer
    frame: RenderFrame,

    renderer: R,
}

impl<R: Renderer> EditSession<R> {
    /// Create a session seeded from `config` and publish the first frame
    pub fn new(config: &EditorConfig, renderer: R) -> Result<Self, EditError> {
        Self::with_model(config, config.seed_model(), renderer)
    }

    /// Create a session around an existing model and publish the first frame
    pub fn with_model(
        config: &EditorConfig,
        model: CurveModel,
        renderer: R,
    ) -> Result<Self, EditError> {
        config.validate()?;
        let viewport = ViewPort::new(config.viewport.width, config.viewport.height)?;

        let mut session = Self {
            model,
            drag: DragState::Idle,
            viewport,
            sensitivity: config.sensitivity,
            step_count: config.step_count,
            style: config.style,
            frame: RenderFrame::default(),
            renderer,
        };
        tracing::info!(
            "Edit session started with {} control points",
            session.model.len()
        );
        session.publish()?;
        Ok(session)
    }

    pub fn model(&self) -> &CurveModel {
        &self.model
    }

    /// Control points, in curve order
    pub fn points(&self) -> &[ScenePoint] {
        self.model.points()
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn viewport(&self) -> &ViewPort {
        &self.viewport
    }

    pub fn sensitivity(&self) -> f64 {
        self.sensitivity
    }

    /// The frame most recently handed to the renderer
    pub fn frame(&self) -> &RenderFrame {
        &self.frame
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Track a window or framebuffer resize
    ///
    /// Only affects how later pointer positions are normalized; the curve
    /// itself is untouched, so no frame is published.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<(), EditError> {
        self.viewport.resize(width, height)?;
        tracing::debug!("[EditSession::resize] {}x{}", width, height);
        Ok(())
    }

    /// Regenerate the whole curve and hand it to the renderer
    fn publish(&mut self) -> Result<(), EditError> {
        let curve = evaluate(self.model.points(), self.step_count)?;
        self.frame = RenderFrame::new(&curve, self.model.points(), self.style);
        self.renderer.present(&self.frame);
        Ok(())
    }
}
