use crate::cosmology::Cosmology;
use crate::error::CosmologyError;
use crate::parameter::ParameterSpec;
use cosmo_domain::class::{ClassObject, ClassRef};
use cosmo_domain::constants::{META, NAME};
use cosmo_domain::mapping::{Mapping, MappingKind};
use cosmo_domain::value::Value;
use indexmap::IndexMap;
use std::any::Any;
use std::borrow::Cow;
use std::sync::Arc;
use tracing::{debug, trace};

/// The constructor signature of a cosmology class.
///
/// Besides the declared [`ParameterSpec`]s, every class accepts the keyword
/// arguments `name` and `meta`. A class may additionally accept arbitrary
/// extra keyword arguments, see [`CosmologyClass::accepts_extra_kwargs`].
#[derive(Debug)]
pub struct CosmologyClass {
    qualname: Cow<'static, str>,
    parameters: Vec<ParameterSpec>,
    default_name: Option<Cow<'static, str>>,
    accepts_extra_kwargs: bool,
}

impl CosmologyClass {
    pub fn builder(qualname: impl Into<Cow<'static, str>>) -> CosmologyClassBuilder {
        CosmologyClassBuilder {
            class: Self {
                qualname: qualname.into(),
                parameters: Vec::new(),
                default_name: None,
                accepts_extra_kwargs: false,
            },
        }
    }

    #[must_use]
    pub fn qualname(&self) -> &str {
        &self.qualname
    }

    /// Declared parameters, in constructor order.
    #[must_use]
    pub fn parameters(&self) -> &[ParameterSpec] {
        &self.parameters
    }

    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&ParameterSpec> {
        self.parameters.iter().find(|p| p.name() == name)
    }

    /// Whether the constructor swallows keyword arguments it does not declare.
    ///
    /// Such classes never report unused keys when read from a mapping: the
    /// extras are handed to the constructor, which discards them. They are
    /// neither rejected nor moved into metadata, even when the caller asked
    /// for that.
    #[must_use]
    pub const fn accepts_extra_kwargs(&self) -> bool {
        self.accepts_extra_kwargs
    }

    /// Names of all keyword arguments the constructor binds explicitly.
    pub fn signature(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().map(ParameterSpec::name).chain([NAME, META])
    }

    /// Whether `key` is an explicit constructor argument.
    #[must_use]
    pub fn binds(&self, key: &str) -> bool {
        key == NAME || key == META || self.parameter(key).is_some()
    }

    #[must_use]
    pub fn class_ref(self: &Arc<Self>) -> ClassRef {
        ClassRef::new(Arc::clone(self))
    }

    /// Instantiates the class from keyword arguments.
    ///
    /// Omitted parameters take their defaults; `name` falls back to the class
    /// default name and `meta` to an empty mapping.
    ///
    /// # Errors
    /// * [`CosmologyError::MissingArgument`] when a required parameter is absent.
    /// * [`CosmologyError::UnexpectedArguments`] for undeclared keys on a class
    ///   without extra keyword support.
    /// * [`CosmologyError::MetaCollision`] when metadata shadows a parameter.
    /// * Validation errors from [`ParameterSpec::normalize`].
    pub fn construct(self: &Arc<Self>, kwargs: Mapping) -> Result<Cosmology, CosmologyError> {
        let mut kwargs = kwargs;

        let name = match kwargs.remove(NAME) {
            None => self.default_name.as_deref().map(str::to_owned),
            Some(Value::None) => None,
            Some(Value::Str(name)) => Some(name),
            Some(other) => {
                return Err(CosmologyError::InvalidParameter {
                    name: NAME.into(),
                    message: format!("name must be a string, got {}", other.type_name()).into(),
                    context: Some(self.qualname.clone()),
                });
            },
        };

        let meta = match kwargs.remove(META) {
            None | Some(Value::None) => Mapping::new(MappingKind::Dict),
            Some(Value::Map(meta)) => meta,
            Some(other) => {
                return Err(CosmologyError::InvalidParameter {
                    name: META.into(),
                    message: format!("meta must be a mapping, got {}", other.type_name()).into(),
                    context: Some(self.qualname.clone()),
                });
            },
        };

        let mut values = IndexMap::with_capacity(self.parameters.len());
        for spec in &self.parameters {
            let raw = match (kwargs.remove(spec.name()), spec.default_value()) {
                (Some(value), _) => value,
                (None, crate::parameter::ParameterDefault::Value(default)) => default.clone(),
                (None, crate::parameter::ParameterDefault::Required) => {
                    return Err(CosmologyError::MissingArgument {
                        class: self.qualname.clone(),
                        name: spec.name().to_owned().into(),
                        context: None,
                    });
                },
            };
            let value = spec.normalize(raw).map_err(|err| match err {
                CosmologyError::InvalidParameter { name, message, .. } => {
                    CosmologyError::InvalidParameter {
                        name,
                        message,
                        context: Some(self.qualname.clone()),
                    }
                },
                other => other,
            })?;
            values.insert(spec.name().to_owned(), value);
        }

        if !kwargs.is_empty() {
            let extra: Vec<String> = kwargs.keys().map(str::to_owned).collect();
            if !self.accepts_extra_kwargs {
                return Err(CosmologyError::UnexpectedArguments {
                    class: self.qualname.clone(),
                    names: extra,
                    context: None,
                });
            }
            trace!(class = %self.qualname, ?extra, "Discarding extra keyword arguments");
        }

        let collisions: Vec<String> =
            meta.keys().filter(|key| values.contains_key(*key)).map(str::to_owned).collect();
        if !collisions.is_empty() {
            return Err(CosmologyError::MetaCollision { keys: collisions, context: None });
        }

        debug!(class = %self.qualname, name = ?name, "Constructed cosmology");
        Ok(Cosmology::from_parts(Arc::clone(self), name, values, meta))
    }
}

impl ClassObject for CosmologyClass {
    fn qualname(&self) -> &str {
        &self.qualname
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

impl PartialEq for CosmologyClass {
    fn eq(&self, other: &Self) -> bool {
        self.qualname == other.qualname
    }
}

/// Builder for [`CosmologyClass`].
#[derive(Debug)]
pub struct CosmologyClassBuilder {
    class: CosmologyClass,
}

impl CosmologyClassBuilder {
    /// Appends a declared parameter. Redeclaring a name replaces the earlier spec.
    #[must_use]
    pub fn parameter(mut self, spec: ParameterSpec) -> Self {
        if let Some(slot) = self.class.parameters.iter_mut().find(|p| p.name() == spec.name()) {
            *slot = spec;
        } else {
            self.class.parameters.push(spec);
        }
        self
    }

    /// Name given to instances constructed without an explicit `name`.
    #[must_use]
    pub fn default_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.class.default_name = Some(name.into());
        self
    }

    /// Lets the constructor accept (and discard) arbitrary extra keyword arguments.
    #[must_use]
    pub const fn accept_extra_kwargs(mut self) -> Self {
        self.class.accepts_extra_kwargs = true;
        self
    }

    #[must_use]
    pub fn build(self) -> Arc<CosmologyClass> {
        Arc::new(self.class)
    }
}
