//! State management for the running coin-toss experiment.
//!
//! [`CoinExperiment`] owns the observation counts, the simulation bias, the
//! outcome log, and the current density curve. Display layers never touch
//! that state directly; they trigger operations here and read back a
//! [`CurveSnapshot`].

use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::constants::{DEFAULT_BIAS, DEFAULT_SEED};
use crate::grid::EvaluationGrid;
use crate::posterior::PosteriorDensity;
use crate::snapshot::{CurvePoint, CurveSnapshot};
use crate::types::Toss;

/// Running state of a coin-toss experiment.
///
/// The density curve is recomputed in full over the evaluation grid after
/// every state mutation; it always has one value per grid point and
/// reflects the current (n, k).
pub struct CoinExperiment {
    /// Tosses recorded so far (n).
    tosses: u64,

    /// Heads recorded so far (k). Invariant: `heads <= tosses`.
    heads: u64,

    /// Probability of heads used to simulate new tosses.
    ///
    /// Affects only future draws, never the posterior over past ones.
    bias: f64,

    /// Cumulative "H"/"T" outcome log, oldest first.
    outcome_log: String,

    /// RNG for simulated tosses. Seeded, so a run is reproducible.
    rng: Xoshiro256PlusPlus,

    /// Fixed evaluation grid, built once at construction.
    grid: EvaluationGrid,

    /// Closed-form posterior, derived once at construction.
    posterior: PosteriorDensity,

    /// Current density values, one per grid point.
    curve: Vec<f64>,
}

impl CoinExperiment {
    /// Create a fresh experiment: no tosses, bias 0.5, deterministic seed.
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    /// Create a fresh experiment with a caller-chosen RNG seed.
    pub fn with_seed(seed: u64) -> Self {
        let grid = EvaluationGrid::new();
        let posterior = PosteriorDensity::derive();
        let curve = posterior.evaluate_grid(&grid, 0, 0);
        Self {
            tosses: 0,
            heads: 0,
            bias: DEFAULT_BIAS,
            outcome_log: String::new(),
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
            grid,
            posterior,
            curve,
        }
    }

    /// Toss the simulated coin once and fold the outcome into the state.
    ///
    /// Draws a Bernoulli outcome with the current simulation bias, then
    /// delegates to [`record_outcome`](Self::record_outcome). Returns the
    /// drawn outcome.
    pub fn record_toss(&mut self) -> Toss {
        // random::<f64>() is uniform on [0, 1), so bias 0.0 never lands
        // heads and bias 1.0 always does.
        let outcome = if self.rng.random::<f64>() < self.bias {
            Toss::Heads
        } else {
            Toss::Tails
        };
        self.record_outcome(outcome);
        outcome
    }

    /// Record a known toss outcome.
    ///
    /// Increments n, increments k iff the outcome is heads, appends the
    /// outcome symbol to the log, and recomputes the density curve.
    /// External event sources that already hold an outcome call this
    /// directly; [`record_toss`](Self::record_toss) is the sampling
    /// front end.
    pub fn record_outcome(&mut self, outcome: Toss) {
        self.tosses += 1;
        if outcome.is_heads() {
            self.heads += 1;
        }
        self.outcome_log.push(outcome.symbol());
        debug_assert!(self.heads <= self.tosses, "heads count exceeded toss count");
        self.recompute_curve();
    }

    /// Reset to the no-data state: n = 0, k = 0, empty log, uniform curve.
    ///
    /// Idempotent; the simulation bias and RNG stream are left untouched.
    pub fn clear(&mut self) {
        self.tosses = 0;
        self.heads = 0;
        self.outcome_log.clear();
        self.recompute_curve();
    }

    /// Set the simulation bias used for future tosses.
    ///
    /// Callers (the external bias control) are expected to clamp to
    /// [0, 1] before calling in; the contract is asserted in debug builds.
    /// Pure state update: no curve recomputation.
    pub fn set_bias(&mut self, bias: f64) {
        debug_assert!((0.0..=1.0).contains(&bias), "bias must lie in [0, 1]");
        self.bias = bias;
    }

    /// Read-only view of the current curve and counts for display layers.
    pub fn snapshot(&self) -> CurveSnapshot {
        let points = self
            .grid
            .thetas()
            .iter()
            .zip(&self.curve)
            .map(|(&theta, &density)| CurvePoint { theta, density })
            .collect();
        CurveSnapshot {
            points,
            tosses: self.tosses,
            heads: self.heads,
            outcome_log: self.outcome_log.clone(),
        }
    }

    /// Tosses recorded so far (n).
    pub fn tosses(&self) -> u64 {
        self.tosses
    }

    /// Heads recorded so far (k).
    pub fn heads(&self) -> u64 {
        self.heads
    }

    /// Current simulation bias.
    pub fn current_bias(&self) -> f64 {
        self.bias
    }

    /// Cumulative H/T outcome log.
    pub fn outcome_log(&self) -> &str {
        &self.outcome_log
    }

    /// Current density values, one per grid point.
    pub fn density_curve(&self) -> &[f64] {
        &self.curve
    }

    /// The fixed evaluation grid.
    pub fn grid(&self) -> &EvaluationGrid {
        &self.grid
    }

    fn recompute_curve(&mut self) {
        self.curve = self
            .posterior
            .evaluate_grid(&self.grid, self.tosses, self.heads);
    }
}

impl Default for CoinExperiment {
    fn default() -> Self {
        Self::new()
    }
}
