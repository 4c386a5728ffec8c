use crate::mapping::MappingKind;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level configuration shared by the converter front-ends.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CosmoConfigInner {
    pub export: ExportConfig,
    pub import: ImportConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct CosmoConfig {
    #[serde(flatten, default)]
    inner: Arc<CosmoConfigInner>,
}

impl Deref for CosmoConfig {
    type Target = CosmoConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for CosmoConfig {
    fn deref_mut(&mut self) -> &mut CosmoConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Defaults applied when exporting a cosmology to a mapping.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub mapping_kind: MappingKind,
    /// Write the class's qualified name instead of a class reference.
    pub cosmology_as_str: bool,
    /// Flatten metadata into the top level instead of a nested `meta` entry.
    pub move_from_meta: bool,
}

/// Defaults applied when importing a cosmology from a mapping.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Fold unrecognized keys into metadata instead of failing.
    pub move_to_meta: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub env_filter: Option<String>,
    pub directory: Option<PathBuf>,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), env_filter: None, directory: None, json: false }
    }
}
