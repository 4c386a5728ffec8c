use cosmo_domain::mapping::Mapping;

/// Data handed to or produced by a format.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Mapping(Mapping),
    Text(String),
}

impl Payload {
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Mapping(_) => "mapping",
            Self::Text(_) => "text",
        }
    }

    #[must_use]
    pub const fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(map) => Some(map),
            Self::Text(_) => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Mapping(_) => None,
        }
    }
}

impl From<Mapping> for Payload {
    fn from(map: Mapping) -> Self {
        Self::Mapping(map)
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}
