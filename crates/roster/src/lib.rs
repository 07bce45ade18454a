//! Facade crate for Roster.
//! Re-exports the collection, storage, and shared crates and composes them into the
//! application-level operations: settings, logging, and whole-collection persistence.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//!
//! ```rust
//! use roster::domain::config::RosterConfig;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), roster::RosterError> {
//! # let tmp = tempfile::tempdir().unwrap();
//! let mut config = RosterConfig::default();
//! config.collection.name = "inventory".to_owned();
//! config.collection.max_items = 2;
//!
//! let mut items = roster::collection_from_config(&config)?;
//! items.append_value(json!({ "id": 1, "name": "Bolt", "value": 10 }))?;
//!
//! let path = tmp.path().join("inventory.json");
//! roster::save_collection(&items, &path, &config.json)?;
//! assert_eq!(roster::load_collection(&path)?.records(), items.records());
//! # Ok(())
//! # }
//! ```

mod document;
mod error;
mod logging;

pub use crate::document::{
    ENABLE_VALIDATION_KEY, ITEMS_KEY, MAX_ITEMS_KEY, NAME_KEY, load_collection, save_collection,
};
pub use crate::error::{RosterError, RosterErrorExt};
pub use crate::logging::init_logging;
pub use roster_collection as collection;
pub use roster_domain as domain;
pub use roster_kernel as kernel;
pub use roster_logger as logger;
pub use roster_storage as storage;

use roster_collection::{BoundedCollection, CollectionError};
use roster_domain::config::RosterConfig;
use roster_kernel::KernelError;
use std::path::Path;

/// Loads [`RosterConfig`] from `path` (or `roster.*` in the working directory) layered
/// with `ROSTER__SECTION__KEY` environment overrides.
///
/// # Errors
/// Returns [`KernelError::Config`] if the file is missing or the values are mistyped.
pub fn load_settings(path: Option<impl AsRef<Path>>) -> Result<RosterConfig, KernelError> {
    roster_kernel::config::load_config(path)
}

/// Creates an empty collection from the `collection` config section.
///
/// # Errors
/// Returns [`CollectionError::Configuration`] if `max_items` is not positive.
pub fn collection_from_config(config: &RosterConfig) -> Result<BoundedCollection, CollectionError> {
    BoundedCollection::with_settings(&config.collection)
}
