use cosmo_derive::cosmo_error;
use std::borrow::Cow;

#[cosmo_error]
pub enum DemoError {
    #[error("Unknown class{}: {name}", format_context(.context))]
    UnknownClass { name: String, context: Option<Cow<'static, str>> },

    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), DemoError> {
    Err(std::io::Error::other("disk")).context("reading cosmology")
}

fn main() {
    let err = read().unwrap_err();
    assert_eq!(err.to_string(), "IO error (reading cosmology): disk");

    let internal: DemoError = "boom".into();
    assert_eq!(internal.to_string(), "Internal error: boom");

    let unknown = DemoError::UnknownClass { name: "Foo".to_owned(), context: None };
    let unknown: Result<(), DemoError> = Err(unknown);
    let unknown = unknown.context("registry").unwrap_err();
    assert_eq!(unknown.to_string(), "Unknown class (registry): Foo");
}
