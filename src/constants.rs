//! Named constants used throughout the crate.

/// Default deterministic seed for the toss simulator.
///
/// This seed ensures reproducibility: same seed + same bias = same toss
/// sequence. The value `0x636F696E` is "coin" encoded in ASCII.
pub const DEFAULT_SEED: u64 = 0x636F696E;

/// Number of bias values in the evaluation grid.
///
/// The posterior density is evaluated at this many evenly spaced points
/// over [0, 1] inclusive after every recorded toss.
pub const GRID_POINTS: usize = 100;

/// Default simulation bias (probability of heads) for a fresh experiment.
pub const DEFAULT_BIAS: f64 = 0.5;

/// Significant digits used when formatting density values for display.
///
/// Display-only: the curve itself carries full f64 precision.
pub const DISPLAY_SIG_DIGITS: i32 = 4;
