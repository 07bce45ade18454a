use crate::config::CollectionConfig;
use crate::error::CollectionError;
use crate::processor::DataProcessor;
use crate::validation::validate_record;
use roster_domain::config::CollectionSettings;
use roster_domain::record::type_name;
use roster_domain::{Record, Value};
use std::fmt;
use tracing::{debug, warn};

/// An append-only, capacity-bounded sequence of records.
///
/// - **Capacity**: never holds more than [`CollectionConfig::max_items`] records.
/// - **Validation**: when enabled, every appended record must pass
///   [`validate_record`](crate::validate_record).
/// - **Ordering**: records are kept in insertion order.
///
/// Failed appends leave the collection unchanged. The type has no internal locking;
/// share it across threads only behind external synchronization.
///
/// # Example
///
/// ```rust
/// use roster_collection::{BoundedCollection, CollectionConfig, CollectionError};
/// use serde_json::json;
///
/// let config = CollectionConfig::builder().name("inventory").max_items(2).build()?;
/// let mut items = BoundedCollection::new(config);
///
/// items.append_value(json!({ "id": 1, "name": "Bolt", "value": 10 }))?;
/// items.append_value(json!({ "id": 2, "name": "Nut", "value": 5 }))?;
///
/// let full = items.append_value(json!({ "id": 3, "name": "Gear", "value": 7 }));
/// assert!(matches!(full, Err(CollectionError::Capacity { .. })));
/// assert_eq!(items.describe(), r#"BoundedCollection(name="inventory", items=2/2)"#);
/// # Ok::<(), CollectionError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BoundedCollection {
    config: CollectionConfig,
    records: Vec<Record>,
}

impl BoundedCollection {
    #[must_use]
    pub const fn new(config: CollectionConfig) -> Self {
        Self { config, records: Vec::new() }
    }

    /// Builds the configuration from raw settings and creates an empty collection.
    ///
    /// # Errors
    /// Returns [`CollectionError::Configuration`] if `max_items` is not positive.
    pub fn with_settings(settings: &CollectionSettings) -> Result<Self, CollectionError> {
        CollectionConfig::try_from(settings).map(Self::new)
    }

    /// Appends a record at the end of the collection.
    ///
    /// # Errors
    /// Returns [`CollectionError::Capacity`] if the collection is full.
    /// Returns [`CollectionError::Validation`] if validation is enabled and the record
    /// is empty or lacks a required key.
    pub fn append(&mut self, record: Record) -> Result<(), CollectionError> {
        self.ensure_capacity()?;

        if self.config.enable_validation() {
            validate_record(&record).map_err(|err| self.rejected(err))?;
        }

        self.records.push(record);
        debug!(
            collection = self.config.name(),
            size = self.records.len(),
            max_items = self.config.max_items(),
            "Record appended"
        );
        Ok(())
    }

    /// Appends an untyped JSON value, which must be an object.
    ///
    /// # Errors
    /// Same as [`append`](Self::append); non-object values are always rejected with
    /// [`CollectionError::Validation`], whether or not validation is enabled.
    pub fn append_value(&mut self, value: Value) -> Result<(), CollectionError> {
        match value {
            Value::Object(record) => self.append(record),
            other => {
                self.ensure_capacity()?;
                Err(self.rejected(CollectionError::Validation {
                    message: format!("item must be a JSON object, got {}", type_name(&other))
                        .into(),
                    missing: Vec::new(),
                    context: None,
                }))
            },
        }
    }

    /// Returns a snapshot of the stored records.
    ///
    /// When both `key` and `value` are given, only records whose `key` equals `value`
    /// are returned; records lacking `key` are skipped. Otherwise every record is returned.
    #[must_use]
    pub fn query(&self, key: Option<&str>, value: Option<&Value>) -> Vec<Record> {
        match (key, value) {
            (Some(key), Some(value)) => self
                .records
                .iter()
                .filter(|record| record.get(key) == Some(value))
                .cloned()
                .collect(),
            _ => self.records.clone(),
        }
    }

    /// Runs a processor over a snapshot of the stored records.
    #[must_use]
    pub fn process<P>(&self, processor: &P) -> Vec<Record>
    where
        P: DataProcessor + ?Sized,
    {
        processor.process(self.records.clone())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records that can still be appended.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.config.max_items().saturating_sub(self.records.len())
    }

    #[must_use]
    pub const fn config(&self) -> &CollectionConfig {
        &self.config
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    #[must_use]
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Human-readable summary: configuration name and `size/max_items`.
    ///
    /// The name is rendered with `Debug` quoting, so it appears in double quotes and any
    /// embedded quote or control character is backslash-escaped.
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }

    fn ensure_capacity(&self) -> Result<(), CollectionError> {
        if self.records.len() >= self.config.max_items() {
            return Err(self.rejected(CollectionError::Capacity {
                max_items: self.config.max_items(),
                context: None,
            }));
        }
        Ok(())
    }

    fn rejected(&self, err: CollectionError) -> CollectionError {
        warn!(collection = self.config.name(), error = %err, "Record rejected");
        err
    }
}

impl fmt::Display for BoundedCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BoundedCollection(name={:?}, items={}/{})",
            self.config.name(),
            self.records.len(),
            self.config.max_items()
        )
    }
}

impl<'a> IntoIterator for &'a BoundedCollection {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
