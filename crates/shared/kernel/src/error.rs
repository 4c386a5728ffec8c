use std::borrow::Cow;

/// A specialized [`CosmologyError`] enum of this crate.
#[cosmo_derive::cosmo_error(result_alias)]
pub enum CosmologyError {
    /// A required constructor argument was not supplied.
    #[error("{class}.__init__() missing required argument '{name}'{}", format_context(.context))]
    MissingArgument {
        class: Cow<'static, str>,
        name: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    /// Keyword arguments the class signature does not accept.
    #[error("{class}.__init__() got unexpected keyword arguments {names:?}{}", format_context(.context))]
    UnexpectedArguments {
        class: Cow<'static, str>,
        names: Vec<String>,
        context: Option<Cow<'static, str>>,
    },

    /// A value that fails the parameter's validation.
    #[error("Invalid value for parameter '{name}'{}: {message}", format_context(.context))]
    InvalidParameter {
        name: Cow<'static, str>,
        message: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    /// A quantity given in a unit other than the one the parameter is declared in.
    #[error("Parameter '{name}' expects unit '{expected}', got '{found}'{}", format_context(.context))]
    UnitMismatch {
        name: Cow<'static, str>,
        expected: cosmo_domain::units::Unit,
        found: cosmo_domain::units::Unit,
        context: Option<Cow<'static, str>>,
    },

    /// Metadata keys shadowing declared parameters.
    #[error("Metadata keys {keys:?} collide with parameter names{}", format_context(.context))]
    MetaCollision { keys: Vec<String>, context: Option<Cow<'static, str>> },

    /// The class name is not present in the registry.
    #[error("Unknown cosmology class '{name}'{}", format_context(.context))]
    UnknownClass { name: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// No realization is published under the name.
    #[error("Unknown realization '{name}'{}", format_context(.context))]
    UnknownRealization { name: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal cosmology error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
