use crate::error::FormatError;
use crate::format::CosmologyFormat;
use crate::json::JsonFormat;
use crate::mapping::MappingFormat;
use crate::payload::Payload;
use cosmo_kernel::cosmology::Cosmology;
use cosmo_kernel::registry::ClassRegistry;
use cosmo_mapping::{FromMappingOptions, ToMappingOptions};
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::sync::{Arc, LazyLock};
use tracing::{debug, trace, warn};

static GLOBAL: LazyLock<FormatRegistry> = LazyLock::new(FormatRegistry::with_builtins);

type FormatMap = FxHashMap<&'static str, Arc<dyn CosmologyFormat>>;

/// Thread-safe table of formats keyed by name.
#[derive(Debug, Clone, Default)]
pub struct FormatRegistry {
    formats: Arc<RwLock<FormatMap>>,
}

impl FormatRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the `mapping` and `json` formats.
    #[must_use]
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        registry.register(Arc::new(MappingFormat));
        registry.register(Arc::new(JsonFormat { pretty: true }));
        registry
    }

    pub fn global() -> &'static Self {
        &GLOBAL
    }

    pub fn register(&self, format: Arc<dyn CosmologyFormat>) -> Option<Arc<dyn CosmologyFormat>> {
        let name = format.name();
        let previous = self.formats.write().insert(name, format);
        if previous.is_some() {
            warn!(format = name, "Format re-registered, previous reader/writer replaced");
        } else {
            debug!(format = name, "Format registered");
        }
        previous
    }

    pub fn unregister(&self, name: &str) -> Option<Arc<dyn CosmologyFormat>> {
        self.formats.write().remove(name)
    }

    /// # Errors
    /// Returns [`FormatError::UnknownFormat`] if nothing is registered under `name`.
    pub fn get(&self, name: &str) -> Result<Arc<dyn CosmologyFormat>, FormatError> {
        self.formats.read().get(name).cloned().ok_or_else(|| FormatError::UnknownFormat {
            name: name.to_owned().into(),
            context: None,
        })
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.formats.read().keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Finds the single format that recognizes `input`.
    ///
    /// # Errors
    /// [`FormatError::Unidentified`] if no format matches, [`FormatError::Ambiguous`]
    /// if several do.
    pub fn identify(&self, input: &Payload) -> Result<Arc<dyn CosmologyFormat>, FormatError> {
        let formats = self.formats.read();
        let mut matches: Vec<_> = formats.values().filter(|f| f.identify(input)).collect();
        match matches.len() {
            0 => Err(FormatError::Unidentified { context: Some(input.type_name().into()) }),
            1 => Ok(Arc::clone(matches.remove(0))),
            _ => {
                let mut names: Vec<String> = matches.iter().map(|f| f.name().to_owned()).collect();
                names.sort_unstable();
                Err(FormatError::Ambiguous { names, context: None })
            },
        }
    }

    /// Writes `cosmo` in the named format.
    ///
    /// # Errors
    /// An unknown format name, or any error of the format's writer.
    pub fn to_format(
        &self,
        cosmo: &Cosmology,
        format: &str,
        options: &ToMappingOptions,
    ) -> Result<Payload, FormatError> {
        let writer = self.get(format)?;
        trace!(format, class = %cosmo.class().qualname(), "Writing cosmology");
        writer.write(cosmo, options)
    }

    /// Reads a cosmology, identifying the format from `input` when `format` is `None`.
    ///
    /// # Errors
    /// An unknown or unidentifiable format, or any error of the format's reader.
    pub fn from_format(
        &self,
        input: &Payload,
        format: Option<&str>,
        options: &FromMappingOptions,
        classes: &ClassRegistry,
    ) -> Result<Cosmology, FormatError> {
        let reader = match format {
            Some(name) => self.get(name)?,
            None => self.identify(input)?,
        };
        trace!(format = reader.name(), "Reading cosmology");
        reader.read(input, options, classes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmo_domain::mapping::Mapping;

    #[derive(Debug)]
    struct Greedy;

    impl CosmologyFormat for Greedy {
        fn name(&self) -> &'static str {
            "greedy"
        }

        fn identify(&self, _: &Payload) -> bool {
            true
        }

        fn write(&self, _: &Cosmology, _: &ToMappingOptions) -> Result<Payload, FormatError> {
            Err(FormatError::UnsupportedValue { message: "greedy format cannot write".into(), context: None })
        }

        fn read(
            &self,
            _: &Payload,
            _: &FromMappingOptions,
            _: &ClassRegistry,
        ) -> Result<Cosmology, FormatError> {
            Err(FormatError::Unidentified { context: None })
        }
    }

    #[test]
    fn builtins_are_registered() {
        assert_eq!(FormatRegistry::with_builtins().names(), ["json", "mapping"]);
    }

    #[test]
    fn identification_picks_the_single_match() {
        let registry = FormatRegistry::with_builtins();
        let format = registry.identify(&Payload::Mapping(Mapping::default())).unwrap();
        assert_eq!(format.name(), "mapping");
        let format = registry.identify(&Payload::from("{}")).unwrap();
        assert_eq!(format.name(), "json");
    }

    #[test]
    fn unrecognized_input_is_reported() {
        let err = FormatRegistry::with_builtins().identify(&Payload::from("H0 = 70")).unwrap_err();
        assert!(matches!(err, FormatError::Unidentified { .. }));
    }

    #[test]
    fn overlapping_formats_are_ambiguous() {
        let registry = FormatRegistry::with_builtins();
        registry.register(Arc::new(Greedy));
        let err = registry.identify(&Payload::from("{}")).unwrap_err();
        assert!(matches!(err, FormatError::Ambiguous { ref names, .. } if names == &["greedy", "json"]));

        registry.unregister("greedy");
        assert!(registry.identify(&Payload::from("{}")).is_ok());
    }

    #[test]
    fn unknown_format_is_a_lookup_error() {
        let err = FormatRegistry::new().get("ascii.ecsv").unwrap_err();
        assert_eq!(err.kind(), cosmo_mapping::ErrorKind::Lookup);
    }
}
