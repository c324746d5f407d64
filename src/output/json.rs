//! JSON serialization for density curve snapshots.

use crate::snapshot::CurveSnapshot;

/// Serialize a snapshot to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// `CurveSnapshot`).
pub fn to_json(snapshot: &CurveSnapshot) -> Result<String, serde_json::Error> {
    serde_json::to_string(snapshot)
}

/// Serialize a snapshot to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// `CurveSnapshot`).
pub fn to_json_pretty(snapshot: &CurveSnapshot) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(snapshot)
}
