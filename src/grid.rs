//! Fixed evaluation grid for the bias parameter.

use crate::constants::GRID_POINTS;

/// Fixed ordered sequence of bias values at which the posterior density
/// is evaluated.
///
/// The grid spans [0, 1] inclusive with [`GRID_POINTS`] evenly spaced
/// points and never changes for the lifetime of the process.
#[derive(Clone, Debug)]
pub struct EvaluationGrid {
    thetas: Vec<f64>,
}

impl EvaluationGrid {
    /// Build the standard grid: `theta_i = i / (GRID_POINTS - 1)`.
    pub fn new() -> Self {
        let denom = (GRID_POINTS - 1) as f64;
        let thetas = (0..GRID_POINTS).map(|i| i as f64 / denom).collect();
        Self { thetas }
    }

    /// The bias values, in increasing order.
    pub fn thetas(&self) -> &[f64] {
        &self.thetas
    }

    /// Number of grid points.
    pub fn len(&self) -> usize {
        self.thetas.len()
    }

    /// Whether the grid is empty (never true for the standard grid).
    pub fn is_empty(&self) -> bool {
        self.thetas.is_empty()
    }
}

impl Default for EvaluationGrid {
    fn default() -> Self {
        Self::new()
    }
}
