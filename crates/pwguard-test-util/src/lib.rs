//! Shared test utilities for the pwguard workspace.
//!
//! Used by the CLI integration tests and the BDD harness to compare reports across runs.

use serde_json::Value;

const TIMESTAMP_KEYS: [&str; 2] = ["started_at", "finished_at"];

/// Normalize non-deterministic report fields for golden comparison.
///
/// `tool.version` is replaced only on the root envelope (an object carrying `schema`, `tool`,
/// `verdict` and `findings`). Timestamps are replaced only at the root; nested finding data never
/// carries them.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    let Some(obj) = value.as_object_mut() else {
        return value;
    };

    let is_envelope = ["schema", "tool", "verdict", "findings"]
        .iter()
        .all(|k| obj.contains_key(*k));
    if !is_envelope {
        return value;
    }

    if let Some(tool) = obj.get_mut("tool").and_then(Value::as_object_mut)
        && tool.contains_key("version")
    {
        tool.insert("version".to_string(), Value::from("__VERSION__"));
    }
    for key in TIMESTAMP_KEYS {
        if obj.contains_key(key) {
            obj.insert(key.to_string(), Value::from("__TIMESTAMP__"));
        }
    }

    value
}

/// Parse a report and normalize it in one step.
pub fn normalized_report(text: &str) -> Value {
    let value: Value = serde_json::from_str(text).expect("report should be valid JSON");
    normalize_nondeterministic(value)
}
