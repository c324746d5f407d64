//! Read-only view of the experiment state handed to display layers.

use serde::{Deserialize, Serialize};

/// One evaluated point of the posterior density curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Bias value (the independent variable).
    pub theta: f64,
    /// Posterior density at `theta` for the snapshot's (n, k).
    pub density: f64,
}

/// Everything a display layer needs to render the current state.
///
/// Produced by [`CoinExperiment::snapshot`](crate::CoinExperiment::snapshot)
/// after every state-changing operation. Owning copies throughout, so the
/// snapshot stays valid while the experiment keeps mutating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveSnapshot {
    /// Density curve: one point per grid value, theta increasing.
    pub points: Vec<CurvePoint>,
    /// Tosses recorded so far (n).
    pub tosses: u64,
    /// Heads recorded so far (k).
    pub heads: u64,
    /// Cumulative H/T outcome log, oldest first.
    pub outcome_log: String,
}

impl CurveSnapshot {
    /// Render-ready title line, e.g. `Coin tosses: HTH (3 tosses, 2 heads)`.
    pub fn title(&self) -> String {
        format!(
            "Coin tosses: {} ({} tosses, {} heads)",
            self.outcome_log, self.tosses, self.heads
        )
    }

    /// Axis label for the density, e.g. `P(theta | n=3, k=2)`.
    pub fn density_label(&self) -> String {
        format!("P(theta | n={}, k={})", self.tosses, self.heads)
    }

    /// Largest density value on the curve (0.0 for an empty curve).
    pub fn peak_density(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.density)
            .fold(0.0_f64, f64::max)
    }
}
