//! Structural contract for records accepted by a validating collection.

use crate::error::CollectionError;
use roster_domain::constants::REQUIRED_FIELDS;
use roster_domain::record::type_name;
use roster_domain::{Record, Value};

/// Validates an untyped JSON value and returns it as a record.
///
/// # Errors
/// Returns [`CollectionError::Validation`] if the value is not an object, or if the
/// object fails [`validate_record`].
pub fn validate_value(value: &Value) -> Result<&Record, CollectionError> {
    let Value::Object(record) = value else {
        return Err(CollectionError::Validation {
            message: format!("item must be a JSON object, got {}", type_name(value)).into(),
            missing: Vec::new(),
            context: None,
        });
    };

    validate_record(record)?;
    Ok(record)
}

/// Checks that a record is non-empty and carries every required key (`id`, `name`, `value`).
///
/// # Errors
/// Returns [`CollectionError::Validation`] listing the missing keys.
pub fn validate_record(record: &Record) -> Result<(), CollectionError> {
    let missing = missing_fields(record);

    if record.is_empty() {
        return Err(CollectionError::Validation {
            message: "item cannot be empty".into(),
            missing,
            context: None,
        });
    }

    if !missing.is_empty() {
        return Err(CollectionError::Validation {
            message: format!("missing required fields: {}", missing.join(", ")).into(),
            missing,
            context: None,
        });
    }

    Ok(())
}

fn missing_fields(record: &Record) -> Vec<String> {
    REQUIRED_FIELDS
        .iter()
        .filter(|field| !record.contains_key(**field))
        .map(|field| (*field).to_owned())
        .collect()
}
