// Copyright 2025 the Bezier Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Curve evaluation: control points to a sampled polyline.
//!
//! The curve of degree n = N - 1 through N control points is evaluated in
//! Bernstein form, which is equivalent to de Casteljau's construction. The
//! evaluator is a pure function and keeps no state between calls.

pub mod binomial;
pub mod evaluate;

pub use binomial::binomial;
pub use evaluate::{SampledCurve, bernstein, evaluate};
