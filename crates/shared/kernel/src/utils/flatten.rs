use roster_domain::constants::DEFAULT_FLATTEN_SEPARATOR;
use roster_domain::{Record, Value};

/// Flattens nested objects into a single level using `.`-joined key paths.
///
/// See [`flatten_with`] for the general form.
#[must_use]
pub fn flatten(nested: &Record) -> Record {
    flatten_with(nested, DEFAULT_FLATTEN_SEPARATOR, "")
}

/// Flattens nested objects into a single level.
///
/// Every key of the result is the `separator`-joined path from the root to a
/// non-object value, prepended with `prefix` when it is not empty. Arrays and
/// scalars are emitted as-is; empty nested objects contribute no keys.
///
/// When two paths produce the same flattened key the last one wins, keeping the
/// position of the first.
///
/// # Example
/// ```rust
/// # use roster_kernel::utils::flatten_with;
/// # use serde_json::json;
/// let nested = json!({ "db": { "host": "localhost", "port": 5432 } });
/// let flat = flatten_with(nested.as_object().unwrap(), "__", "app");
/// assert_eq!(flat["app__db__port"], json!(5432));
/// ```
#[must_use]
pub fn flatten_with(nested: &Record, separator: &str, prefix: &str) -> Record {
    let mut flat = Record::new();
    flatten_into(&mut flat, nested, separator, prefix);
    flat
}

fn flatten_into(flat: &mut Record, nested: &Record, separator: &str, prefix: &str) {
    for (key, value) in nested {
        let path =
            if prefix.is_empty() { key.clone() } else { format!("{prefix}{separator}{key}") };

        match value {
            Value::Object(inner) => flatten_into(flat, inner, separator, &path),
            other => {
                flat.insert(path, other.clone());
            },
        }
    }
}
