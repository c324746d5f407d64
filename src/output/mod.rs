//! Output formatting for density curve snapshots.
//!
//! This module provides formatters for displaying a `CurveSnapshot`:
//! - Terminal: Human-readable output with colors and box drawing
//! - JSON: Machine-readable serialization

mod json;
mod terminal;

pub use json::{to_json, to_json_pretty};
pub use terminal::format_snapshot;
