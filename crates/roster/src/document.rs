//! Whole-collection persistence on top of the JSON object store.
//!
//! A saved collection is a single JSON object:
//!
//! ```json
//! {
//!   "name": "inventory",
//!   "max_items": 10,
//!   "enable_validation": true,
//!   "items": [ { "id": 1, "name": "Bolt", "value": 10 } ]
//! }
//! ```

use crate::error::RosterError;
use roster_collection::{BoundedCollection, CollectionErrorExt};
use roster_domain::config::{CollectionSettings, JsonSettings};
use roster_domain::record::type_name;
use roster_domain::{Record, Value};
use roster_storage::{JsonWriteOptions, load_json_object, save_json_object_with};
use std::path::Path;
use tracing::debug;

pub const NAME_KEY: &str = "name";
pub const MAX_ITEMS_KEY: &str = "max_items";
pub const ENABLE_VALIDATION_KEY: &str = "enable_validation";
pub const ITEMS_KEY: &str = "items";

/// Saves the configuration and records of `collection` to `path` atomically.
///
/// # Errors
/// Returns [`RosterError::Storage`] if the document cannot be written.
pub fn save_collection(
    collection: &BoundedCollection,
    path: impl AsRef<Path>,
    settings: &JsonSettings,
) -> Result<(), RosterError> {
    let path = path.as_ref();
    let config = collection.config();

    let mut document = Record::new();
    document.insert(NAME_KEY.to_owned(), Value::from(config.name()));
    document.insert(MAX_ITEMS_KEY.to_owned(), Value::from(config.max_items()));
    document.insert(ENABLE_VALIDATION_KEY.to_owned(), Value::Bool(config.enable_validation()));
    document.insert(
        ITEMS_KEY.to_owned(),
        Value::Array(collection.iter().cloned().map(Value::Object).collect()),
    );

    save_json_object_with(&document, path, &JsonWriteOptions::from(settings))?;
    debug!(
        path = %path.display(),
        collection = config.name(),
        items = collection.len(),
        "Collection saved"
    );
    Ok(())
}

/// Loads a collection saved by [`save_collection`].
///
/// Every stored item goes through [`BoundedCollection::append_value`] again, so a document
/// edited by hand cannot bypass the capacity or validation rules. Missing header keys fall
/// back to the defaults of [`CollectionSettings`]; a missing `items` key means no records.
///
/// # Errors
/// Returns [`RosterError::Storage`] if the file is missing, malformed, or not an object.
/// Returns [`RosterError::Header`] or [`RosterError::Document`] if it is not shaped like a
/// saved collection.
/// Returns [`RosterError::Collection`] if the header is invalid or an item is rejected.
pub fn load_collection(path: impl AsRef<Path>) -> Result<BoundedCollection, RosterError> {
    let path = path.as_ref();
    let mut document = load_json_object(path)?;

    let items = match document.remove(ITEMS_KEY) {
        Some(Value::Array(items)) => items,
        None => Vec::new(),
        Some(other) => {
            return Err(RosterError::Document {
                message: format!("'{ITEMS_KEY}' must be an array, got {}", type_name(&other))
                    .into(),
                context: Some(path.display().to_string().into()),
            });
        },
    };

    let settings: CollectionSettings = serde_json::from_value(Value::Object(document))
        .map_err(|source| RosterError::Header {
            source,
            context: Some(path.display().to_string().into()),
        })?;

    let mut collection = BoundedCollection::with_settings(&settings)?;
    for (index, item) in items.into_iter().enumerate() {
        collection.append_value(item).context(format!("item {index} of {}", path.display()))?;
    }

    debug!(
        path = %path.display(),
        collection = %settings.name,
        items = collection.len(),
        "Collection loaded"
    );
    Ok(collection)
}
