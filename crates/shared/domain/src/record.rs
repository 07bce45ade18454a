//! Records are loosely typed JSON objects.
//! Key order follows insertion order (`serde_json` is built with `preserve_order`).

pub use serde_json::Value;

/// A JSON-compatible key-value structure stored in a collection.
pub type Record = serde_json::Map<String, Value>;

/// Returns the JSON type name of a value, as used in error messages.
#[must_use]
pub const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
