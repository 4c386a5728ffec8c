use cosmo_domain::DomainError;
use cosmo_kernel::CosmologyError;
use std::borrow::Cow;

/// Broad category of a conversion failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An argument of the wrong kind, e.g. a non-mapping output type.
    Type,
    /// Arguments that do not fit the target signature.
    Usage,
    /// A class or realization that is not registered.
    Lookup,
}

#[cosmo_derive::cosmo_error(result_alias)]
pub enum MappingError {
    #[error("'cosmology' must be a cosmology class or its qualified name, not {found}{}", format_context(.context))]
    InvalidClassArgument { found: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("No cosmology class given and the mapping has no 'cosmology' entry{}", format_context(.context))]
    MissingClass { context: Option<Cow<'static, str>> },

    #[error("there are unused parameters {keys:?}{}", format_context(.context))]
    UnusedParameters { keys: Vec<String>, context: Option<Cow<'static, str>> },

    #[error("{source}{}", format_context(.context))]
    Cosmology { source: CosmologyError, context: Option<Cow<'static, str>> },

    #[error("{source}{}", format_context(.context))]
    Domain { source: DomainError, context: Option<Cow<'static, str>> },
}

impl MappingError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidClassArgument { .. } | Self::Domain { .. } => ErrorKind::Type,
            Self::MissingClass { .. }
            | Self::Cosmology {
                source: CosmologyError::UnknownClass { .. } | CosmologyError::UnknownRealization { .. },
                ..
            } => ErrorKind::Lookup,
            Self::UnusedParameters { .. } | Self::Cosmology { .. } => ErrorKind::Usage,
        }
    }
}
