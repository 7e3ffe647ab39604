//! Shared test utilities for the privacheck workspace.
//!
//! Used by the CLI integration tests and `xtask` to compare reports across runs.

use serde_json::Value;

const TIMESTAMP_PLACEHOLDER: &str = "__TIMESTAMP__";
const VERSION_PLACEHOLDER: &str = "__VERSION__";

/// Replace the fields of a report envelope that change between runs.
///
/// Only the root object is touched, and only when it looks like a report
/// (`schema`, `tool`, `verdict` and `checks` all present): `started_at` and
/// `finished_at` become `"__TIMESTAMP__"`, `tool.version` becomes `"__VERSION__"`.
/// Anything else is returned unchanged.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    let Some(obj) = value.as_object_mut() else {
        return value;
    };
    let is_envelope = ["schema", "tool", "verdict", "checks"]
        .iter()
        .all(|k| obj.contains_key(*k));
    if !is_envelope {
        return value;
    }

    for key in ["started_at", "finished_at"] {
        if obj.contains_key(key) {
            obj.insert(key.to_string(), Value::String(TIMESTAMP_PLACEHOLDER.to_string()));
        }
    }
    if let Some(tool) = obj.get_mut("tool").and_then(Value::as_object_mut)
        && tool.contains_key("version")
    {
        tool.insert(
            "version".to_string(),
            Value::String(VERSION_PLACEHOLDER.to_string()),
        );
    }
    value
}
