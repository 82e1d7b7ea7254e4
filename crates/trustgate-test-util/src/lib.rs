//! Shared test utilities for the trustgate workspace.
//!
//! This crate exists because `xtask` needs `normalize_nondeterministic` at
//! runtime (not behind `#[cfg(test)]`), so a `#[cfg(test)]` module inside
//! `trustgate-types` would not suffice.

use serde_json::Value;

/// Keys every stage result envelope carries at its root.
const ENVELOPE_KEYS: [&str; 5] = ["stage_id", "stage_name", "status", "duration_ms", "result"];

/// Normalize non-deterministic JSON fields for golden-file comparison.
///
/// Only `duration_ms` varies between runs, and it is replaced with `0` only when the *root*
/// object looks like a stage result envelope. Manifest blocks carry arbitrary generator keys, so
/// nested objects are never rewritten.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut()
        && ENVELOPE_KEYS.iter().all(|k| obj.contains_key(*k))
    {
        obj.insert("duration_ms".to_string(), Value::Number(0.into()));
    }
    value
}

/// Parse, normalize and pretty-print, for readable golden diffs.
pub fn normalized_pretty(text: &str) -> Result<String, serde_json::Error> {
    let value: Value = serde_json::from_str(text)?;
    serde_json::to_string_pretty(&normalize_nondeterministic(value))
}
