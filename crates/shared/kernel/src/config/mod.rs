use crate::error::{KernelError, KernelErrorExt};
use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix for environment overrides (`ROSTER__COLLECTION__MAX_ITEMS` maps to `collection.max_items`).
pub const ENV_PREFIX: &str = "ROSTER";
/// Separator between nesting levels in environment variable names.
pub const ENV_SEPARATOR: &str = "__";
/// File stem used when no explicit path is given; the extension is probed by the loader.
pub const DEFAULT_CONFIG_FILE: &str = "roster";

/// Loads a configuration structure from a file layered with environment overrides.
///
/// 1. **Base File**: the given path, or `roster.{toml,json,yaml,...}` in the working directory.
/// 2. **Environment Overrides**: variables prefixed with `ROSTER__`, nested with `__`.
///
/// # Errors
/// Returns [`KernelError::Config`] if the file is missing, a source is malformed, or the
/// merged values do not match the structure of `T`.
///
/// # Example
/// ```rust,no_run
/// use roster_domain::config::RosterConfig;
/// use roster_kernel::config::load_config;
///
/// let cfg: RosterConfig = load_config(Some("config/local.toml")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, KernelError>
where
    T: DeserializeOwned,
{
    load_config_with_prefix(path, ENV_PREFIX)
}

/// Same as [`load_config`], with a custom environment prefix.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with_prefix<T>(
    path: Option<impl AsRef<Path>>,
    env_prefix: &str,
) -> Result<T, KernelError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix(env_prefix)
                .prefix_separator(ENV_SEPARATOR)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        );

    info!(path = %effective_path.display(), prefix = env_prefix, "Loading config");

    builder
        .build()
        .context(format!("Failed to build config from {}", effective_path.display()))?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
