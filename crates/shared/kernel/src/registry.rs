//! Registry of cosmology classes addressable by qualified name.
//!
//! Importers resolve `"FlatLambdaCDM"`-style class names through a
//! [`ClassRegistry`]. Registries are cheap to clone and share one table.
//! [`ClassRegistry::global`] is a process-wide instance pre-populated with the
//! built-in classes; tests and embedders can build isolated registries instead.

use crate::class::CosmologyClass;
use crate::error::CosmologyError;
use crate::flrw;
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::sync::{Arc, LazyLock};
use tracing::{debug, trace, warn};

static GLOBAL: LazyLock<ClassRegistry> = LazyLock::new(ClassRegistry::with_builtins);

/// A thread-safe name → class table.
#[derive(Debug, Clone, Default)]
pub struct ClassRegistry {
    classes: Arc<RwLock<FxHashMap<String, Arc<CosmologyClass>>>>,
}

impl ClassRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in FLRW classes.
    #[must_use]
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        for class in flrw::builtin_classes() {
            registry.register(class);
        }
        registry
    }

    /// The process-wide registry.
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Adds a class under its qualified name, returning the class it replaced.
    pub fn register(&self, class: Arc<CosmologyClass>) -> Option<Arc<CosmologyClass>> {
        let name = class.qualname().to_owned();
        let previous = self.classes.write().insert(name.clone(), class);
        if previous.is_some() {
            warn!(class = %name, "Cosmology class re-registered, previous definition replaced");
        } else {
            debug!(class = %name, "Cosmology class registered");
        }
        previous
    }

    /// Removes a class. Removing an absent name is not an error.
    pub fn unregister(&self, name: &str) -> Option<Arc<CosmologyClass>> {
        let removed = self.classes.write().remove(name);
        if removed.is_none() {
            trace!(class = %name, "Unregister skipped, class not present");
        }
        removed
    }

    /// Looks a class up by qualified name.
    ///
    /// # Errors
    /// Returns [`CosmologyError::UnknownClass`] if no class is registered under `name`.
    pub fn get(&self, name: &str) -> Result<Arc<CosmologyClass>, CosmologyError> {
        self.classes.read().get(name).cloned().ok_or_else(|| CosmologyError::UnknownClass {
            name: name.to_owned().into(),
            context: None,
        })
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.classes.read().contains_key(name)
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.classes.read().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.read().len()
    }
}
