use crate::error::MappingError;
use cosmo_domain::config::ExportConfig;
use cosmo_domain::constants::{COSMOLOGY, META, NAME, is_reserved};
use cosmo_domain::mapping::{Mapping, MappingKind};
use cosmo_domain::value::Value;
use cosmo_kernel::cosmology::Cosmology;
use tracing::trace;

/// How [`to_mapping`] lays out its output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToMappingOptions {
    /// Kind of the produced mapping.
    pub kind: MappingKind,
    /// Write the class's qualified name under `cosmology` instead of the class itself.
    pub cosmology_as_str: bool,
    /// Write metadata entries at the top level instead of a nested `meta` entry.
    pub move_from_meta: bool,
}

impl ToMappingOptions {
    /// Selects the output kind by name (`"dict"`, `"OrderedDict"`).
    ///
    /// # Errors
    /// Returns [`MappingError::Domain`] if `name` is not a mapping kind.
    pub fn kind_named(mut self, name: &str) -> Result<Self, MappingError> {
        self.kind = name.parse()?;
        Ok(self)
    }
}

impl From<&ExportConfig> for ToMappingOptions {
    fn from(config: &ExportConfig) -> Self {
        Self {
            kind: config.mapping_kind,
            cosmology_as_str: config.cosmology_as_str,
            move_from_meta: config.move_from_meta,
        }
    }
}

/// Serializes a cosmology into a new mapping.
///
/// The output holds `cosmology`, `name`, every declared parameter in
/// constructor order and finally `meta`. With
/// [`ToMappingOptions::move_from_meta`] the metadata entries follow the
/// parameters directly; entries named like a reserved key stay in a nested
/// `meta` so they cannot clobber the class or name.
#[must_use]
pub fn to_mapping(cosmo: &Cosmology, options: &ToMappingOptions) -> Mapping {
    let meta = cosmo.meta();
    let capacity = cosmo.class().parameters().len() + meta.len() + 3;
    let mut map = Mapping::with_capacity(options.kind, capacity);

    let class = if options.cosmology_as_str {
        Value::Str(cosmo.class().qualname().to_owned())
    } else {
        Value::Class(cosmo.class_ref())
    };
    map.insert(COSMOLOGY, class);
    map.insert(NAME, cosmo.name());

    for (key, value) in cosmo.parameters() {
        map.insert(key, value.clone());
    }

    if options.move_from_meta {
        let mut nested = Mapping::new(meta.kind());
        for (key, value) in meta {
            if is_reserved(key) {
                nested.insert(key.clone(), value.clone());
            } else {
                map.insert(key.clone(), value.clone());
            }
        }
        if !nested.is_empty() {
            map.insert(META, nested);
        }
    } else {
        map.insert(META, meta.clone());
    }

    trace!(
        class = %cosmo.class().qualname(),
        kind = %options.kind,
        keys = map.len(),
        "Exported cosmology to mapping"
    );
    map
}
