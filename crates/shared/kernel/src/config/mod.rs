use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Prefix of environment overrides, e.g. `COSMO__EXPORT__MAPPING_KIND`.
pub const ENV_PREFIX: &str = "COSMO";

/// File stem searched when no path is given (`cosmo.toml`, `cosmo.json`, ...).
pub const DEFAULT_FILE: &str = "cosmo";

#[cosmo_derive::cosmo_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads `T` from a config file overlaid with `COSMO__` environment variables.
///
/// An explicit `path` must exist. Without one the default `cosmo` file is
/// optional, so a bare environment (or nothing at all) yields `T`'s serde
/// defaults. Nested keys use double underscores:
/// `COSMO__IMPORT__MOVE_TO_META=true` sets `import.move_to_meta`.
///
/// # Errors
/// Returns [`ConfigError::Config`] when an explicit file is missing or the
/// merged sources do not deserialize into `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (effective_path, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_FILE), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

    debug!(path = %effective_path.display(), required, "Loading config");

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
