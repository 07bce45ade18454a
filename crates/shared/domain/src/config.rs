use crate::constants::{DEFAULT_JSON_INDENT, DEFAULT_MAX_ITEMS};
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level application settings.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RosterConfigInner {
    pub collection: CollectionSettings,
    pub json: JsonSettings,
    pub logging: LoggingSettings,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct RosterConfig {
    #[serde(flatten, default)]
    inner: Arc<RosterConfigInner>,
}

impl Deref for RosterConfig {
    type Target = RosterConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for RosterConfig {
    fn deref_mut(&mut self) -> &mut RosterConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Raw collection settings as read from configuration sources.
///
/// `max_items` is signed on purpose: it is checked (and rejected when not positive)
/// when the settings are turned into a collection configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CollectionSettings {
    pub name: String,
    pub max_items: i64,
    pub enable_validation: bool,
}

/// JSON persistence settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct JsonSettings {
    /// Spaces per indentation level; `None` writes compact JSON.
    pub indent: Option<usize>,
    pub escape_non_ascii: bool,
}

/// Logging settings consumed by the logger bootstrap.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub name: String,
    pub level: String,
    pub console: bool,
    pub path: Option<PathBuf>,
    pub json: bool,
    pub env_filter: Option<String>,
}

// --- Default ---

impl Default for CollectionSettings {
    fn default() -> Self {
        Self {
            name: "default".to_owned(),
            max_items: i64::try_from(DEFAULT_MAX_ITEMS).unwrap_or(i64::MAX),
            enable_validation: true,
        }
    }
}

impl Default for JsonSettings {
    fn default() -> Self {
        Self { indent: Some(DEFAULT_JSON_INDENT), escape_non_ascii: false }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            name: "roster".to_owned(),
            level: "info".to_owned(),
            console: true,
            path: None,
            json: false,
            env_filter: None,
        }
    }
}
