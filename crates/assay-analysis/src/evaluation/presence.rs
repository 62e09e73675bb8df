//! Presence test for raw attribute values.

use serde_json::Value;

/// A value is present when it is non-null and, for strings, arrays and
/// objects, non-empty. Booleans and numbers are present whatever their value.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        Value::Bool(_) | Value::Number(_) => true,
    }
}
