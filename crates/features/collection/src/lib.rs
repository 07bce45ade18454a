//! # Bounded Collection
//!
//! A configured container of JSON records with two guarantees:
//! 1. **Capacity**: the collection never grows beyond its configured `max_items`.
//! 2. **Validation**: when enabled, every record carries the `id`, `name`, and `value` keys.
//!
//! Records only ever get appended; a rejected append leaves the collection untouched.
//! Batch transformations plug in through the [`DataProcessor`] trait.

mod collection;
mod config;
mod error;
mod processor;
mod validation;

pub use crate::collection::BoundedCollection;
pub use crate::config::{CollectionConfig, CollectionConfigBuilder, NoName, WithName};
pub use crate::error::{CollectionError, CollectionErrorExt};
pub use crate::processor::{DataProcessor, process_data};
pub use crate::validation::{validate_record, validate_value};
pub use roster_domain::{Record, Value};
