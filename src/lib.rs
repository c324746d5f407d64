//! # coin-posterior
//!
//! Bayesian updating for a coin-bias parameter, one toss at a time.
//!
//! This crate is the computational core of an interactive teaching demo:
//! a simulated coin is tossed with a user-chosen bias, and after every
//! toss the posterior density of the bias (flat prior, binomial
//! likelihood) is recomputed over a fixed 100-point grid for display.
//!
//! The posterior has a closed form. With n tosses and k heads observed,
//!
//! ```text
//! P(theta | n, k) = (n + 1) * C(n, k) * theta^k * (1 - theta)^(n - k)
//! ```
//!
//! which is derived once ([`PosteriorDensity::derive`]) and only
//! re-evaluated as the counts change.
//!
//! ## Quick Start
//!
//! ```
//! use coin_posterior::CoinExperiment;
//!
//! let mut experiment = CoinExperiment::new();
//! experiment.set_bias(0.8);
//!
//! // Each toss updates (n, k) and recomputes the density curve.
//! for _ in 0..5 {
//!     experiment.record_toss();
//! }
//!
//! let snapshot = experiment.snapshot();
//! assert_eq!(snapshot.tosses, 5);
//! assert_eq!(snapshot.points.len(), 100);
//! assert_eq!(snapshot.outcome_log.len(), 5);
//!
//! // Back to the flat prior.
//! experiment.clear();
//! assert!(experiment.density_curve().iter().all(|&d| (d - 1.0).abs() < 1e-12));
//! ```
//!
//! ## Forcing outcomes
//!
//! Event sources that already have an outcome in hand (tests, replayed
//! sessions) bypass the sampler:
//!
//! ```
//! use coin_posterior::{CoinExperiment, Toss};
//!
//! let mut experiment = CoinExperiment::new();
//! experiment.record_outcome(Toss::Heads);
//! experiment.record_outcome(Toss::Heads);
//! assert_eq!((experiment.tosses(), experiment.heads()), (2, 2));
//! ```
//!
//! ## Rendering
//!
//! The [`output`] module renders a [`CurveSnapshot`] for a terminal
//! (colored bar chart) or as JSON for other display layers. The toss
//! simulator is deterministic by default (seeded RNG); use
//! [`CoinExperiment::with_seed`] to pick a different stream.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod constants;
mod experiment;
mod grid;
mod posterior;
mod snapshot;
mod types;

// Functional modules
pub mod output;

// Re-exports for public API
pub use constants::{DEFAULT_BIAS, DEFAULT_SEED, DISPLAY_SIG_DIGITS, GRID_POINTS};
pub use experiment::CoinExperiment;
pub use grid::EvaluationGrid;
pub use posterior::PosteriorDensity;
pub use snapshot::{CurvePoint, CurveSnapshot};
pub use types::Toss;
