// Copyright 2025 the Bezier Editor Authors
// SPDX-License-Identifier: Apache-2.0

//! Binomial coefficients for the Bernstein basis.
//!
//! C(n, r) is built as n/1 * (n-1)/2 * ... * (n-r+1)/r, dividing after each
//! multiplication. After step k the running value is C(n, k), so every
//! division is exact and the intermediate never grows past the final
//! coefficient times (n - k + 1).

/// Exact binomial coefficient C(n, r)
///
/// Returns `Some(0)` when `r > n`, and `None` only if the coefficient does
/// not fit in a `u128` (degrees well beyond anything an editor produces).
pub fn binomial(n: u32, r: u32) -> Option<u128> {
    if r > n {
        return Some(0);
    }
    // C(n, r) == C(n, n - r); iterate over the shorter side
    let r = r.min(n - r);

    let mut res: u128 = 1;
    for k in 1..=r {
        res = res.checked_mul(u128::from(n - k + 1))? / u128::from(k);
    }
    Some(res)
}

/// Binomial coefficient as a float weight
///
/// Uses the exact integer result whenever it exists and falls back to the
/// same product evaluated in floating point otherwise. Past degree ~1030 the
/// result is `inf`; use [`ln_binomial`] there.
pub(crate) fn binomial_weight(n: u32, r: u32) -> f64 {
    if let Some(exact) = binomial(n, r) {
        return exact as f64;
    }
    let r = r.min(n - r);
    (1..=r).fold(1.0, |acc, k| acc * f64::from(n - k + 1) / f64::from(k))
}

/// Natural log of C(n, r), finite for any `r <= n`
pub(crate) fn ln_binomial(n: u32, r: u32) -> f64 {
    debug_assert!(r <= n);
    let r = r.min(n - r);
    (1..=r)
        .map(|k| f64::from(n - k + 1).ln() - f64::from(k).ln())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_one() {
        for n in 0..40 {
            assert_eq!(binomial(n, 0), Some(1));
            assert_eq!(binomial(n, n), Some(1));
        }
    }

    #[test]
    fn symmetric() {
        for n in 0..60 {
            for r in 0..=n {
                assert_eq!(binomial(n, r), binomial(n, n - r), "C({n}, {r})");
            }
        }
    }

    #[test]
    fn known_values() {
        assert_eq!(binomial(3, 1), Some(3));
        assert_eq!(binomial(4, 2), Some(6));
        assert_eq!(binomial(10, 3), Some(120));
        assert_eq!(binomial(52, 5), Some(2_598_960));
        assert_eq!(binomial(64, 32), Some(1_832_624_140_942_590_534));
    }

    #[test]
    fn pascal_rule_holds() {
        for n in 1..50 {
            for r in 1..n {
                let lhs = binomial(n, r).unwrap();
                let rhs = binomial(n - 1, r - 1).unwrap() + binomial(n - 1, r).unwrap();
                assert_eq!(lhs, rhs, "C({n}, {r})");
            }
        }
    }

    #[test]
    fn r_greater_than_n_is_zero() {
        assert_eq!(binomial(3, 4), Some(0));
    }

    #[test]
    fn large_degree_falls_back_to_float() {
        assert_eq!(binomial(400, 200), None);
        let w = binomial_weight(400, 200);
        assert!(w.is_finite() && w > 1e100);
        assert_eq!(binomial_weight(400, 0), 1.0);
        assert_eq!(binomial_weight(20, 10), 184_756.0);
    }

    #[test]
    fn ln_binomial_matches_exact_values() {
        assert_eq!(ln_binomial(7, 0), 0.0);
        let exact = binomial_weight(30, 12);
        assert!((ln_binomial(30, 12) - exact.ln()).abs() < 1e-9);
    }

    #[test]
    fn ln_binomial_stays_finite_past_float_range() {
        assert!(binomial_weight(1100, 550).is_infinite());
        let ln = ln_binomial(1100, 550);
        assert!(ln.is_finite() && ln > 700.0);
    }
}
