use std::borrow::Cow;

/// Errors raised while interpreting domain primitives from their names.
#[cosmo_derive::cosmo_error]
pub enum DomainError {
    /// The requested mapping constructor is not a mapping type.
    #[error("'cls' must be a (sub)class of dict or OrderedDict, not '{name}'{}", format_context(.context))]
    InvalidMappingKind { name: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The unit string does not name a supported unit.
    #[error("Unknown unit '{name}'{}", format_context(.context))]
    UnknownUnit { name: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
