//! Closed-form posterior density for the coin-bias parameter.
//!
//! ## Model
//!
//! The bias theta is the probability of heads. With a flat prior and the
//! binomial likelihood of observing k heads in n tosses:
//!
//! - Prior: p(theta) = 1 on [0, 1]
//! - Likelihood: p(k | theta, n) = C(n,k) * theta^k * (1-theta)^(n-k)
//! - Marginal: p(k | n) = integral of the likelihood over theta
//!
//! The marginal has a closed form by the Beta-function identity,
//! `integral_0^1 theta^k (1-theta)^(n-k) dtheta = k!(n-k)!/(n+1)!`,
//! which collapses to `1/(n+1)` once the binomial coefficient cancels.
//!
//! ## Posterior
//!
//! p(theta | n, k) = (n+1) * C(n,k) * theta^k * (1-theta)^(n-k)
//!
//! i.e. Beta(k+1, n-k+1). The derivation happens once, at
//! [`PosteriorDensity::derive`]; afterwards the formula is only
//! re-evaluated at new (theta, n, k) points, never re-derived.

use crate::grid::EvaluationGrid;

/// The derived closed-form posterior density, evaluated in log space.
#[derive(Clone, Debug)]
pub struct PosteriorDensity {
    // Flat prior value on [0, 1]. Kept explicit so the derivation reads
    // as prior * likelihood / marginal rather than a baked-in Beta pdf.
    ln_prior: f64,
}

impl PosteriorDensity {
    /// Derive the posterior formula from the flat prior and the binomial
    /// likelihood.
    ///
    /// Runs once per experiment; evaluation afterwards is pure.
    pub fn derive() -> Self {
        Self { ln_prior: 1.0_f64.ln() }
    }

    /// Marginal probability of observing any particular k in n tosses
    /// under the flat prior: `1/(n+1)`.
    ///
    /// Never zero for n >= 0, so the posterior is always well defined.
    pub fn marginal_likelihood(&self, n: u64) -> f64 {
        1.0 / (n as f64 + 1.0)
    }

    /// Evaluate the posterior density at a single bias value.
    ///
    /// # Panics
    ///
    /// Debug builds assert `k <= n` and `0 <= theta <= 1`; violating either
    /// is a programming error, not a runtime condition.
    pub fn evaluate(&self, theta: f64, n: u64, k: u64) -> f64 {
        debug_assert!(k <= n, "heads count must not exceed toss count");
        debug_assert!((0.0..=1.0).contains(&theta), "theta must lie in [0, 1]");
        self.evaluate_with_coefficient(theta, n, k, ln_binomial_coefficient(n, k))
    }

    /// Evaluate the posterior density at every grid point for the given
    /// observation counts.
    ///
    /// The log binomial coefficient is computed once and shared across
    /// the sweep.
    pub fn evaluate_grid(&self, grid: &EvaluationGrid, n: u64, k: u64) -> Vec<f64> {
        debug_assert!(k <= n, "heads count must not exceed toss count");
        let ln_coeff = ln_binomial_coefficient(n, k);
        grid.thetas()
            .iter()
            .map(|&theta| self.evaluate_with_coefficient(theta, n, k, ln_coeff))
            .collect()
    }

    fn evaluate_with_coefficient(&self, theta: f64, n: u64, k: u64, ln_coeff: f64) -> f64 {
        let tails = n - k;

        // Grid endpoints are handled exactly: theta^0 = 1 even at theta = 0,
        // so the density there is (n+1) * C(n,k) with the surviving factor,
        // and 0 whenever a positive exponent meets a zero base.
        if theta == 0.0 {
            return if k == 0 { n as f64 + 1.0 } else { 0.0 };
        }
        if theta == 1.0 {
            return if tails == 0 { n as f64 + 1.0 } else { 0.0 };
        }

        let ln_likelihood = ln_coeff + k as f64 * theta.ln() + tails as f64 * (1.0 - theta).ln();
        // Dividing by the marginal 1/(n+1) adds ln(n+1) in log space.
        let ln_marginal = self.marginal_likelihood(n).ln();
        (self.ln_prior + ln_likelihood - ln_marginal).exp()
    }
}

impl Default for PosteriorDensity {
    fn default() -> Self {
        Self::derive()
    }
}

/// Natural log of the binomial coefficient C(n, k), via log-factorial sums.
///
/// O(n) per call; computed once per (n, k) and reused across a grid sweep.
fn ln_binomial_coefficient(n: u64, k: u64) -> f64 {
    ln_factorial(n) - ln_factorial(k) - ln_factorial(n - k)
}

fn ln_factorial(m: u64) -> f64 {
    (2..=m).map(|i| (i as f64).ln()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marginal_is_one_over_n_plus_one() {
        let post = PosteriorDensity::derive();
        assert_eq!(post.marginal_likelihood(0), 1.0);
        assert!((post.marginal_likelihood(9) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_no_data_gives_flat_prior() {
        let post = PosteriorDensity::derive();
        for theta in [0.0, 0.123, 0.5, 0.987, 1.0] {
            assert!(
                (post.evaluate(theta, 0, 0) - 1.0).abs() < 1e-12,
                "posterior with no data should equal the prior at theta={theta}"
            );
        }
    }

    #[test]
    fn test_all_heads_closed_form() {
        // Post(theta, 3, 3) = 4 * theta^3
        let post = PosteriorDensity::derive();
        for theta in [0.1, 0.5, 0.9] {
            let expected = 4.0 * theta * theta * theta;
            assert!((post.evaluate(theta, 3, 3) - expected).abs() < 1e-10);
        }
    }

    #[test]
    fn test_one_tail_closed_form() {
        // Post(theta, 1, 0) = 2 * (1 - theta)
        let post = PosteriorDensity::derive();
        for theta in [0.0, 0.25, 0.75, 1.0] {
            let expected = 2.0 * (1.0 - theta);
            assert!((post.evaluate(theta, 1, 0) - expected).abs() < 1e-10);
        }
    }

    #[test]
    fn test_endpoints_exact() {
        let post = PosteriorDensity::derive();
        // Positive exponent against a zero base kills the density.
        assert_eq!(post.evaluate(0.0, 5, 2), 0.0);
        assert_eq!(post.evaluate(1.0, 5, 2), 0.0);
        // Surviving factor at the boundary is n + 1.
        assert_eq!(post.evaluate(0.0, 5, 0), 6.0);
        assert_eq!(post.evaluate(1.0, 5, 5), 6.0);
    }

    #[test]
    fn test_binomial_coefficient_log() {
        // C(5, 2) = 10
        assert!((ln_binomial_coefficient(5, 2) - 10.0_f64.ln()).abs() < 1e-10);
        // C(n, 0) = C(n, n) = 1
        assert_eq!(ln_binomial_coefficient(7, 0), 0.0);
        assert!((ln_binomial_coefficient(7, 7)).abs() < 1e-10);
    }

    #[test]
    fn test_grid_sweep_matches_pointwise() {
        let post = PosteriorDensity::derive();
        let grid = EvaluationGrid::new();
        let curve = post.evaluate_grid(&grid, 10, 4);
        for (theta, value) in grid.thetas().iter().zip(&curve) {
            assert!((post.evaluate(*theta, 10, 4) - value).abs() < 1e-12);
        }
    }
}
