#![allow(dead_code)]

use roster_collection::{BoundedCollection, CollectionConfig, Record};
use serde_json::{Value, json};

/// Configuration shared by the collection tests: capacity 10, validation on.
/// # Panics
/// * If the configuration is rejected, the function will panic.
#[must_use]
pub fn test_config() -> CollectionConfig {
    CollectionConfig::builder()
        .name("test")
        .max_items(10)
        .enable_validation(true)
        .build()
        .expect("test config must be valid")
}

#[must_use]
pub fn test_collection() -> BoundedCollection {
    BoundedCollection::new(test_config())
}

/// Three complete records with ids 1..=3.
#[must_use]
pub fn sample_records() -> Vec<Record> {
    [
        json!({ "id": 1, "name": "Item 1", "value": 100 }),
        json!({ "id": 2, "name": "Item 2", "value": 200 }),
        json!({ "id": 3, "name": "Item 3", "value": 300 }),
    ]
    .into_iter()
    .map(into_record)
    .collect()
}

/// # Panics
/// * If `value` is not a JSON object.
#[must_use]
pub fn into_record(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture must be an object, got {other}"),
    }
}
