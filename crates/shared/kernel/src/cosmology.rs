use crate::class::CosmologyClass;
use crate::error::CosmologyError;
use cosmo_domain::class::ClassRef;
use cosmo_domain::constants::{META, NAME};
use cosmo_domain::mapping::{Mapping, MappingKind};
use cosmo_domain::value::Value;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// An instance of a [`CosmologyClass`].
///
/// Equality compares the class, the name and every parameter value.
/// Metadata does not take part in equality.
#[derive(Debug, Clone)]
pub struct Cosmology {
    class: Arc<CosmologyClass>,
    name: Option<String>,
    parameters: IndexMap<String, Value>,
    meta: Mapping,
}

impl Cosmology {
    pub(crate) const fn from_parts(
        class: Arc<CosmologyClass>,
        name: Option<String>,
        parameters: IndexMap<String, Value>,
        meta: Mapping,
    ) -> Self {
        Self { class, name, parameters, meta }
    }

    #[must_use]
    pub const fn class(&self) -> &Arc<CosmologyClass> {
        &self.class
    }

    #[must_use]
    pub fn class_ref(&self) -> ClassRef {
        self.class.class_ref()
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub const fn meta(&self) -> &Mapping {
        &self.meta
    }

    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&Value> {
        self.parameters.get(name)
    }

    /// Declared parameters and their values, in constructor order.
    pub fn parameters(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.parameters.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Hubble constant at z=0 in km / (Mpc s).
    #[must_use]
    pub fn h0(&self) -> Option<f64> {
        self.scalar("H0")
    }

    /// Matter density at z=0 in units of the critical density.
    #[must_use]
    pub fn om0(&self) -> Option<f64> {
        self.scalar("Om0")
    }

    /// CMB temperature at z=0 in K.
    #[must_use]
    pub fn tcmb0(&self) -> Option<f64> {
        self.scalar("Tcmb0")
    }

    fn scalar(&self, name: &str) -> Option<f64> {
        self.parameters.get(name).and_then(Value::as_f64)
    }

    /// Keyword arguments that rebuild this instance through its class.
    #[must_use]
    pub fn init_arguments(&self) -> Mapping {
        let mut kwargs = Mapping::with_capacity(MappingKind::Dict, self.parameters.len() + 2);
        kwargs.insert(NAME, self.name.clone());
        for (key, value) in &self.parameters {
            kwargs.insert(key.clone(), value.clone());
        }
        kwargs.insert(META, self.meta.clone());
        kwargs
    }

    /// Returns a copy with some constructor arguments changed.
    ///
    /// `changes` holds keyword arguments: parameter names, `name` and `meta`.
    /// Without an explicit `name`, a named instance becomes `"<name> (modified)"`.
    /// A `meta` mapping is merged over the existing metadata.
    /// An empty `changes` returns an identical copy.
    ///
    /// # Errors
    /// Any error of [`CosmologyClass::construct`], e.g. an undeclared parameter.
    pub fn clone_with(&self, changes: Mapping) -> Result<Self, CosmologyError> {
        if changes.is_empty() {
            return Ok(self.clone());
        }

        let mut changes = changes;
        let mut kwargs = self.init_arguments();

        if !changes.contains_key(NAME)
            && let Some(name) = &self.name
        {
            kwargs.insert(NAME, format!("{name} (modified)"));
        }

        match changes.remove(META) {
            Some(Value::Map(extra)) => {
                let mut meta = self.meta.clone();
                meta.extend(extra);
                kwargs.insert(META, meta);
            },
            Some(other) => {
                kwargs.insert(META, other);
            },
            None => {},
        }

        kwargs.extend(changes);
        self.class.construct(kwargs)
    }
}

impl PartialEq for Cosmology {
    fn eq(&self, other: &Self) -> bool {
        *self.class == *other.class
            && self.name == other.name
            && self.parameters == other.parameters
    }
}

impl fmt::Display for Cosmology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.class.qualname())?;
        match &self.name {
            Some(name) => write!(f, "name=\"{name}\"")?,
            None => f.write_str("name=None")?,
        }
        for (key, value) in &self.parameters {
            write!(f, ", {key}={value}")?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flrw;
    use cosmo_domain::units::{Quantity, Unit};

    fn sample() -> Cosmology {
        let mut kwargs = Mapping::default();
        kwargs.insert("H0", 70.0);
        kwargs.insert("Om0", 0.3);
        kwargs.insert("Tcmb0", 2.725);
        kwargs.insert("name", "sample");
        let mut meta = Mapping::default();
        meta.insert("reference", "test");
        kwargs.insert("meta", meta);
        flrw::flat_lambda_cdm().construct(kwargs).unwrap()
    }

    #[test]
    fn equality_ignores_metadata() {
        let a = sample();
        let mut changes = Mapping::default();
        let mut meta = Mapping::default();
        meta.insert("extra", 1_i64);
        changes.insert("meta", meta);
        changes.insert("name", "sample");
        let b = a.clone_with(changes).unwrap();
        assert_eq!(a, b);
        assert_eq!(b.meta().get("extra"), Some(&Value::Int(1)));
        assert_eq!(b.meta().get("reference"), Some(&Value::from("test")));
    }

    #[test]
    fn clone_without_name_marks_modification() {
        let a = sample();
        let mut changes = Mapping::default();
        changes.insert("Tcmb0", 0.0);
        let b = a.clone_with(changes).unwrap();
        assert_eq!(b.name(), Some("sample (modified)"));
        assert_eq!(b.tcmb0(), Some(0.0));
        assert_ne!(a, b);
    }

    #[test]
    fn empty_clone_is_identical() {
        let a = sample();
        let b = a.clone_with(Mapping::default()).unwrap();
        assert_eq!(a, b);
        assert_eq!(b.name(), Some("sample"));
    }

    #[test]
    fn init_arguments_rebuild_an_equal_instance() {
        let a = sample();
        let b = a.class().construct(a.init_arguments()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.meta(), b.meta());
    }

    #[test]
    fn accessors_read_scalars() {
        let a = sample();
        assert_eq!(a.h0(), Some(70.0));
        assert_eq!(a.om0(), Some(0.3));
        assert_eq!(
            a.parameter("H0"),
            Some(&Value::Quantity(Quantity::new(70.0, Unit::KmPerSecondPerMpc)))
        );
    }

    #[test]
    fn display_lists_parameters() {
        let rendered = sample().to_string();
        assert!(rendered.starts_with("FlatLambdaCDM(name=\"sample\", H0=70 km / (Mpc s), Om0=0.3"));
    }
}
