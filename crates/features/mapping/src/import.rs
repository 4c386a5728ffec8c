use crate::error::MappingError;
use cosmo_domain::config::ImportConfig;
use cosmo_domain::constants::{COSMOLOGY, META};
use cosmo_domain::mapping::{Mapping, MappingKind};
use cosmo_domain::value::Value;
use cosmo_kernel::class::CosmologyClass;
use cosmo_kernel::cosmology::Cosmology;
use cosmo_kernel::registry::ClassRegistry;
use std::sync::Arc;
use tracing::{debug, instrument, trace};

/// Explicit target class for [`from_mapping`].
#[derive(Debug, Clone)]
pub enum ClassArg {
    Class(Arc<CosmologyClass>),
    /// Qualified name, resolved through the registry.
    Name(String),
}

impl From<Arc<CosmologyClass>> for ClassArg {
    fn from(class: Arc<CosmologyClass>) -> Self {
        Self::Class(class)
    }
}

impl From<&str> for ClassArg {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<String> for ClassArg {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

#[derive(Debug, Clone, Default)]
pub struct FromMappingOptions {
    /// Overrides the mapping's own `cosmology` entry.
    pub cosmology: Option<ClassArg>,
    /// Fold keys the class does not bind into metadata instead of failing.
    pub move_to_meta: bool,
}

impl FromMappingOptions {
    #[must_use]
    pub fn cosmology(mut self, class: impl Into<ClassArg>) -> Self {
        self.cosmology = Some(class.into());
        self
    }

    #[must_use]
    pub const fn move_to_meta(mut self, move_to_meta: bool) -> Self {
        self.move_to_meta = move_to_meta;
        self
    }
}

impl From<&ImportConfig> for FromMappingOptions {
    fn from(config: &ImportConfig) -> Self {
        Self { cosmology: None, move_to_meta: config.move_to_meta }
    }
}

/// Builds a cosmology from its mapping representation.
///
/// The class is taken from [`FromMappingOptions::cosmology`] when given, in
/// which case the mapping's `cosmology` entry is ignored; otherwise from that
/// entry. Either may be a class or a qualified name.
///
/// Keys the class does not bind are handled in order of precedence:
/// 1. passed through (and dropped) if the class accepts extra keyword arguments;
/// 2. merged under the explicit `meta` entries if `move_to_meta` is set;
/// 3. reported as [`MappingError::UnusedParameters`].
///
/// Declared parameters missing from the mapping take the class defaults.
/// The input mapping is not modified.
///
/// # Errors
/// * [`MappingError::InvalidClassArgument`] for a `cosmology` entry that is
///   neither a class nor a string.
/// * [`MappingError::MissingClass`] when no class information is available.
/// * [`MappingError::UnusedParameters`] as described above.
/// * [`MappingError::Cosmology`] for unknown class names and construction failures.
#[instrument(skip_all, fields(keys = map.len(), move_to_meta = options.move_to_meta))]
pub fn from_mapping(
    map: &Mapping,
    options: &FromMappingOptions,
    registry: &ClassRegistry,
) -> Result<Cosmology, MappingError> {
    let mut params = map.clone();
    let entry = params.remove(COSMOLOGY);

    let class = match (&options.cosmology, entry) {
        (Some(ClassArg::Class(class)), _) => Arc::clone(class),
        (Some(ClassArg::Name(name)), _) => registry.get(name)?,
        (None, Some(value)) => resolve_class(value, registry)?,
        (None, None) => return Err(MappingError::MissingClass { context: None }),
    };

    let mut kwargs = Mapping::with_capacity(MappingKind::Dict, params.len());
    let mut unused = Mapping::new(MappingKind::Dict);
    for (key, value) in params {
        if class.binds(&key) {
            kwargs.insert(key, value);
        } else {
            unused.insert(key, value);
        }
    }

    if !unused.is_empty() {
        if class.accepts_extra_kwargs() {
            trace!(
                class = %class.qualname(),
                keys = unused.len(),
                "Passing unused keys to a class with extra keyword arguments"
            );
            kwargs.extend(unused);
        } else if options.move_to_meta {
            let meta = match kwargs.remove(META) {
                Some(Value::Map(explicit)) => {
                    unused.extend(explicit);
                    Value::Map(unused)
                },
                None | Some(Value::None) => Value::Map(unused),
                Some(other) => other,
            };
            kwargs.insert(META, meta);
        } else {
            return Err(MappingError::UnusedParameters {
                keys: unused.keys().map(str::to_owned).collect(),
                context: None,
            });
        }
    }

    let cosmo = class.construct(kwargs)?;
    debug!(class = %class.qualname(), name = ?cosmo.name(), "Imported cosmology from mapping");
    Ok(cosmo)
}

fn resolve_class(
    value: Value,
    registry: &ClassRegistry,
) -> Result<Arc<CosmologyClass>, MappingError> {
    match value {
        Value::Str(name) => Ok(registry.get(&name)?),
        Value::Class(class) => class.downcast::<CosmologyClass>().ok_or_else(|| {
            MappingError::InvalidClassArgument {
                found: format!("foreign class '{}'", class.qualname()).into(),
                context: None,
            }
        }),
        other => {
            Err(MappingError::InvalidClassArgument { found: other.type_name().into(), context: None })
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use cosmo_kernel::flrw;

    fn minimal() -> Mapping {
        let mut map = Mapping::default();
        map.insert("H0", 70.0);
        map.insert("Om0", 0.3);
        map
    }

    fn import(map: &Mapping, options: &FromMappingOptions) -> Result<Cosmology, MappingError> {
        from_mapping(map, options, &ClassRegistry::with_builtins())
    }

    #[test]
    fn class_is_required() {
        let err = import(&minimal(), &FromMappingOptions::default()).unwrap_err();
        assert!(matches!(err, MappingError::MissingClass { .. }));
        assert_eq!(err.kind(), ErrorKind::Lookup);
    }

    #[test]
    fn non_class_entry_is_a_type_error() {
        let mut map = minimal();
        map.insert("cosmology", 42_i64);
        let err = import(&map, &FromMappingOptions::default()).unwrap_err();
        assert!(matches!(err, MappingError::InvalidClassArgument { .. }));
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn unknown_class_name_is_a_lookup_error() {
        let options = FromMappingOptions::default().cosmology("NotACosmology");
        let err = import(&minimal(), &options).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Lookup);
    }

    #[test]
    fn explicit_class_wins_over_entry() {
        let mut map = minimal();
        map.insert("cosmology", 42_i64);
        let options = FromMappingOptions::default().cosmology(flrw::flat_lambda_cdm());
        let cosmo = from_mapping(&map, &options, &ClassRegistry::new()).unwrap();
        assert_eq!(cosmo.class().qualname(), "FlatLambdaCDM");
        assert_eq!(cosmo.tcmb0(), Some(0.0));
    }

    #[test]
    fn explicit_meta_wins_over_moved_keys() {
        let mut map = minimal();
        map.insert("cosmology", "FlatLambdaCDM");
        map.insert("reference", "moved");
        map.insert("note", "moved");
        let mut meta = Mapping::default();
        meta.insert("reference", "explicit");
        map.insert("meta", meta);

        let options = FromMappingOptions::default().move_to_meta(true);
        let cosmo = import(&map, &options).unwrap();
        assert_eq!(cosmo.meta().get("reference").and_then(Value::as_str), Some("explicit"));
        assert_eq!(cosmo.meta().get("note").and_then(Value::as_str), Some("moved"));
    }

    #[test]
    fn missing_required_parameter_surfaces_from_the_constructor() {
        let mut map = Mapping::default();
        map.insert("cosmology", "LambdaCDM");
        map.insert("H0", 70.0);
        map.insert("Om0", 0.3);
        let err = import(&map, &FromMappingOptions::default()).unwrap_err();
        assert!(err.to_string().contains("missing required argument 'Ode0'"));
        assert_eq!(err.kind(), ErrorKind::Usage);
    }

    #[test]
    fn input_is_left_untouched() {
        let mut map = minimal();
        map.insert("cosmology", "FlatLambdaCDM");
        let before = map.clone();
        import(&map, &FromMappingOptions::default()).unwrap();
        assert_eq!(map, before);
        assert!(map.contains_key("cosmology"));
    }
}
