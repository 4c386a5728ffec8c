use cosmo_mapping::{ErrorKind, MappingError};
use std::borrow::Cow;

#[cosmo_derive::cosmo_error(result_alias)]
pub enum FormatError {
    #[error("No format registered under '{name}'{}", format_context(.context))]
    UnknownFormat { name: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Format could not be identified, pass it explicitly{}", format_context(.context))]
    Unidentified { context: Option<Cow<'static, str>> },

    #[error("Input matches several formats {names:?}, pass one explicitly{}", format_context(.context))]
    Ambiguous { names: Vec<String>, context: Option<Cow<'static, str>> },

    #[error("Format '{format}' cannot read {found} input{}", format_context(.context))]
    UnsupportedInput {
        format: Cow<'static, str>,
        found: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    #[error("Value cannot be represented: {message}{}", format_context(.context))]
    UnsupportedValue { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("{source}{}", format_context(.context))]
    Mapping { source: MappingError, context: Option<Cow<'static, str>> },

    #[error("JSON error{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },
}

impl FormatError {
    /// Category of the failure, shared with the mapping converter.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownFormat { .. } | Self::Unidentified { .. } | Self::Ambiguous { .. } => {
                ErrorKind::Lookup
            },
            Self::UnsupportedInput { .. } | Self::UnsupportedValue { .. } | Self::Json { .. } => {
                ErrorKind::Type
            },
            Self::Mapping { source, .. } => source.kind(),
        }
    }
}
