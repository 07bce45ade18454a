use crate::error::CollectionError;
use private::Sealed;
use roster_domain::config::CollectionSettings;
use roster_domain::constants::DEFAULT_MAX_ITEMS;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Immutable configuration of a [`BoundedCollection`](crate::BoundedCollection).
///
/// A value of this type always has `max_items > 0`: every constructor (the builder,
/// [`CollectionConfig::new`], `TryFrom<CollectionSettings>`, and deserialization)
/// rejects non-positive limits with [`CollectionError::Configuration`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CollectionSettings")]
pub struct CollectionConfig {
    name: String,
    max_items: NonZeroUsize,
    enable_validation: bool,
}

impl CollectionConfig {
    /// Creates a configuration with validation enabled.
    ///
    /// # Errors
    /// Returns [`CollectionError::Configuration`] if `max_items` is zero.
    pub fn new(name: impl Into<String>, max_items: usize) -> Result<Self, CollectionError> {
        Self::builder().name(name).max_items(max_items).build()
    }

    #[must_use = "The configuration is not created until you call .build()"]
    pub const fn builder() -> CollectionConfigBuilder {
        CollectionConfigBuilder {
            state: NoName,
            max_items: DEFAULT_MAX_ITEMS,
            enable_validation: true,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn max_items(&self) -> usize {
        self.max_items.get()
    }

    #[must_use]
    pub const fn enable_validation(&self) -> bool {
        self.enable_validation
    }
}

impl TryFrom<CollectionSettings> for CollectionConfig {
    type Error = CollectionError;

    fn try_from(settings: CollectionSettings) -> Result<Self, Self::Error> {
        Self::try_from(&settings)
    }
}

impl TryFrom<&CollectionSettings> for CollectionConfig {
    type Error = CollectionError;

    fn try_from(settings: &CollectionSettings) -> Result<Self, Self::Error> {
        let max_items = usize::try_from(settings.max_items).map_err(|_| {
            CollectionError::Configuration {
                message: format!("max_items must be positive, got {}", settings.max_items).into(),
                context: Some(format!("collection '{}'", settings.name).into()),
            }
        })?;

        Self::builder()
            .name(settings.name.clone())
            .max_items(max_items)
            .enable_validation(settings.enable_validation)
            .build()
    }
}

#[derive(Debug, Default)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}

/// Builder for [`CollectionConfig`]; a name is required before [`build`](CollectionConfigBuilder::build).
#[allow(private_bounds)]
#[derive(Debug)]
pub struct CollectionConfigBuilder<S: Sealed = NoName> {
    state: S,
    max_items: usize,
    enable_validation: bool,
}

#[allow(private_bounds)]
impl<S: Sealed> CollectionConfigBuilder<S> {
    /// Maximum number of records the collection may hold. Defaults to 100.
    #[must_use = "The builder must be configured before it can build a configuration"]
    pub const fn max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items;
        self
    }

    /// Whether appended records are checked for the required keys. Defaults to `true`.
    #[must_use = "The builder must be configured before it can build a configuration"]
    pub const fn enable_validation(mut self, enable: bool) -> Self {
        self.enable_validation = enable;
        self
    }
}

impl CollectionConfigBuilder<NoName> {
    #[must_use = "The builder must be configured before it can build a configuration"]
    pub fn name(self, name: impl Into<String>) -> CollectionConfigBuilder<WithName> {
        CollectionConfigBuilder {
            state: WithName(name.into()),
            max_items: self.max_items,
            enable_validation: self.enable_validation,
        }
    }
}

impl CollectionConfigBuilder<WithName> {
    /// Consumes the builder and checks the configuration invariants.
    ///
    /// # Errors
    /// Returns [`CollectionError::Configuration`] if `max_items` is zero.
    pub fn build(self) -> Result<CollectionConfig, CollectionError> {
        let Some(max_items) = NonZeroUsize::new(self.max_items) else {
            return Err(CollectionError::Configuration {
                message: "max_items must be positive, got 0".into(),
                context: Some(format!("collection '{}'", self.state.0).into()),
            });
        };

        Ok(CollectionConfig {
            name: self.state.0,
            max_items,
            enable_validation: self.enable_validation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = CollectionConfig::builder().name("test").build().unwrap();
        assert_eq!(config.name(), "test");
        assert_eq!(config.max_items(), 100);
        assert!(config.enable_validation());
    }

    #[test]
    fn test_builder_configuration() {
        let config = CollectionConfig::builder()
            .max_items(7)
            .name("custom")
            .enable_validation(false)
            .build()
            .unwrap();
        assert_eq!(config.max_items(), 7);
        assert!(!config.enable_validation());
    }

    #[test]
    fn test_zero_max_items_rejected() {
        let err = CollectionConfig::new("empty", 0).expect_err("zero capacity must fail");
        assert!(matches!(err, CollectionError::Configuration { .. }));
        assert_eq!(err.context_message(), Some("collection 'empty'"));
    }

    #[test]
    fn test_negative_settings_rejected() {
        let settings =
            CollectionSettings { name: "neg".to_owned(), max_items: -5, enable_validation: true };
        let err = CollectionConfig::try_from(&settings).expect_err("negative capacity must fail");
        assert!(err.to_string().contains("max_items must be positive, got -5"));
    }

    #[test]
    fn test_settings_conversion() {
        let settings =
            CollectionSettings { name: "inv".to_owned(), max_items: 3, enable_validation: false };
        let config = CollectionConfig::try_from(settings).unwrap();
        assert_eq!(config.name(), "inv");
        assert_eq!(config.max_items(), 3);
        assert!(!config.enable_validation());
    }

    #[test]
    fn test_deserialize_enforces_invariant() {
        let ok: CollectionConfig =
            serde_json::from_str(r#"{ "name": "a", "max_items": 2 }"#).unwrap();
        assert_eq!(ok.max_items(), 2);
        assert!(ok.enable_validation());

        let err = serde_json::from_str::<CollectionConfig>(r#"{ "name": "a", "max_items": 0 }"#)
            .expect_err("zero capacity must fail");
        assert!(err.to_string().contains("max_items must be positive"));
    }

    #[test]
    fn test_serialize_shape() {
        let config = CollectionConfig::new("s", 4).unwrap();
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "name": "s", "max_items": 4, "enable_validation": true })
        );
    }
}
