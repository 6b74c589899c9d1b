// Copyright 2025 the Bezier Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Sampling a Bézier curve at evenly spaced parameters.

use super::binomial::{binomial_weight, ln_binomial};
use crate::error::EditError;
use crate::model::ScenePoint;

/// Ordered samples along the curve, in increasing t
///
/// Always regenerated from scratch; never patched in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampledCurve {
    samples: Vec<ScenePoint>,
}

impl SampledCurve {
    pub fn samples(&self) -> &[ScenePoint] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn first(&self) -> Option<ScenePoint> {
        self.samples.first().copied()
    }

    pub fn last(&self) -> Option<ScenePoint> {
        self.samples.last().copied()
    }

    pub fn into_samples(self) -> Vec<ScenePoint> {
        self.samples
    }
}

/// C(n, i) for one term, with its log for degrees past the f64 range
#[derive(Debug, Clone, Copy)]
struct Coefficient {
    value: f64,
    ln: f64,
}

impl Coefficient {
    fn new(n: u32, i: u32) -> Self {
        let value = binomial_weight(n, i);
        let ln = if value.is_finite() {
            value.ln()
        } else {
            ln_binomial(n, i)
        };
        Self { value, ln }
    }
}

/// Bernstein basis polynomial b(n, i, t) = C(n, i) * t^i * (1 - t)^(n - i)
pub fn bernstein(n: u32, i: u32, t: f64) -> f64 {
    debug_assert!(i <= n);
    basis(Coefficient::new(n, i), n, i, t)
}

/// b(n, i, t) given a precomputed C(n, i)
///
/// Terms that vanish at t = 0 or t = 1 are exactly zero. When C(n, i)
/// overflows, the weight is evaluated in log space.
fn basis(coefficient: Coefficient, n: u32, i: u32, t: f64) -> f64 {
    if (t == 0.0 && i > 0) || (t == 1.0 && i < n) {
        return 0.0;
    }
    if coefficient.value.is_finite() {
        return coefficient.value * t.powi(i as i32) * (1.0 - t).powi((n - i) as i32);
    }
    // Only interior terms can overflow, and here 0 < t < 1
    (coefficient.ln + f64::from(i) * t.ln() + f64::from(n - i) * (1.0 - t).ln()).exp()
}

/// Sample the curve through `control_points` at `step_count + 1` parameters
///
/// Sample k is taken at t = k / step_count, so the first sample is exactly
/// t = 0 and the last exactly t = 1. Those two samples reproduce the first
/// and last control point bit for bit.
///
/// An empty control-point list yields an empty curve. A single control
/// point yields that point repeated `step_count + 1` times.
pub fn evaluate(control_points: &[ScenePoint], step_count: u32) -> Result<SampledCurve, EditError> {
    if step_count == 0 {
        return Err(EditError::InvalidStepCount);
    }
    if control_points.is_empty() {
        return Ok(SampledCurve::default());
    }

    let degree = (control_points.len() - 1) as u32;
    let coefficients: Vec<Coefficient> =
        (0..=degree).map(|i| Coefficient::new(degree, i)).collect();

    let samples = (0..=step_count)
        .map(|step| {
            let t = f64::from(step) / f64::from(step_count);
            blend(control_points, &coefficients, degree, t)
        })
        .collect();

    Ok(SampledCurve { samples })
}

/// Weighted sum of the control points at parameter t
fn blend(
    control_points: &[ScenePoint],
    coefficients: &[Coefficient],
    degree: u32,
    t: f64,
) -> ScenePoint {
    let mut point = ScenePoint::ZERO;
    for (i, (control, &coefficient)) in control_points.iter().zip(coefficients).enumerate() {
        point += control.scale(basis(coefficient, degree, i as u32, t));
    }
    point
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn approx_eq(a: ScenePoint, b: ScenePoint) -> bool {
        (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON && (a.z - b.z).abs() < EPSILON
    }

    fn square() -> Vec<ScenePoint> {
        vec![
            ScenePoint::new(-0.5, -0.5, 0.0),
            ScenePoint::new(-0.5, 0.5, 0.0),
            ScenePoint::new(0.5, -0.5, 0.0),
            ScenePoint::new(0.5, 0.5, 0.0),
        ]
    }

    #[test]
    fn sample_count_is_steps_plus_one() {
        let points = square();
        for steps in [1, 2, 7, 100, 333] {
            assert_eq!(evaluate(&points, steps).unwrap().len(), steps as usize + 1);
        }
    }

    #[test]
    fn cubic_scenario_endpoints() {
        let curve = evaluate(&square(), 100).unwrap();
        assert_eq!(curve.len(), 101);
        assert_eq!(curve.samples()[0], ScenePoint::new(-0.5, -0.5, 0.0));
        assert_eq!(curve.samples()[100], ScenePoint::new(0.5, 0.5, 0.0));
    }

    #[test]
    fn cubic_midpoint() {
        // 1/8 p0 + 3/8 p1 + 3/8 p2 + 1/8 p3
        let curve = evaluate(&square(), 2).unwrap();
        assert!(approx_eq(curve.samples()[1], ScenePoint::ZERO));
    }

    #[test]
    fn endpoints_interpolate_for_any_degree() {
        let pool = [
            ScenePoint::new(0.123, -0.987, 0.3),
            ScenePoint::new(-0.71, 0.02, 0.0),
            ScenePoint::new(0.9, 0.45, -0.1),
            ScenePoint::new(-0.33, -0.66, 0.0),
            ScenePoint::new(0.01, 0.99, 0.0),
            ScenePoint::new(-0.2, 0.2, 0.5),
        ];
        for n in 1..=pool.len() {
            let points = &pool[..n];
            let curve = evaluate(points, 37).unwrap();
            assert_eq!(curve.first(), Some(points[0]), "N = {n}");
            assert_eq!(curve.last(), Some(points[n - 1]), "N = {n}");
        }
    }

    #[test]
    fn single_point_is_constant() {
        let p = ScenePoint::new(0.25, -0.4, 0.0);
        let curve = evaluate(&[p], 10).unwrap();
        assert_eq!(curve.len(), 11);
        assert!(curve.samples().iter().all(|&s| s == p));
    }

    #[test]
    fn two_points_give_a_straight_line() {
        let a = ScenePoint::new(-1.0, 0.0, 0.0);
        let b = ScenePoint::new(1.0, 0.5, 0.0);
        let curve = evaluate(&[a, b], 4).unwrap();
        for (k, sample) in curve.samples().iter().enumerate() {
            let t = k as f64 / 4.0;
            let expected = ScenePoint::new(-1.0 + 2.0 * t, 0.5 * t, 0.0);
            assert!(approx_eq(*sample, expected), "sample {k}: {sample:?}");
        }
    }

    #[test]
    fn empty_input_gives_empty_curve() {
        let curve = evaluate(&[], 100).unwrap();
        assert!(curve.is_empty());
    }

    #[test]
    fn zero_steps_is_rejected() {
        assert_eq!(evaluate(&square(), 0), Err(EditError::InvalidStepCount));
    }

    #[test]
    fn bernstein_partition_of_unity() {
        for n in 0..12 {
            for t in [0.0, 0.1, 0.37, 0.5, 0.9, 1.0] {
                let sum: f64 = (0..=n).map(|i| bernstein(n, i, t)).sum();
                assert!((sum - 1.0).abs() < EPSILON, "n={n} t={t} sum={sum}");
            }
        }
    }

    #[test]
    fn endpoints_interpolate_past_float_coefficient_range() {
        let points: Vec<ScenePoint> = (0..1100)
            .map(|k| {
                let a = k as f64 * 0.01;
                ScenePoint::new(a.cos() * 0.9, a.sin() * 0.9, 0.0)
            })
            .collect();
        let curve = evaluate(&points, 10).unwrap();

        assert_eq!(curve.len(), 11);
        assert_eq!(curve.first(), Some(points[0]));
        assert_eq!(curve.last(), Some(points[1099]));
        for s in curve.samples() {
            assert!(s.x.is_finite() && s.y.is_finite() && s.z.is_finite(), "{s:?}");
            assert!(s.x.abs() <= 0.9 + 1e-9 && s.y.abs() <= 0.9 + 1e-9, "{s:?}");
        }
    }

    #[test]
    fn bernstein_partition_of_unity_at_high_degree() {
        for t in [0.0, 0.3, 0.5, 0.77, 1.0] {
            let sum: f64 = (0..=1099).map(|i| bernstein(1099, i, t)).sum();
            assert!((sum - 1.0).abs() < 1e-9, "t={t} sum={sum}");
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        let points = square();
        assert_eq!(evaluate(&points, 50).unwrap(), evaluate(&points, 50).unwrap());
    }
}
