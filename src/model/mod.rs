// Copyright 2025 the Bezier Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Curve data model

pub mod curve;
pub mod scene_point;

pub use curve::CurveModel;
pub use scene_point::ScenePoint;
