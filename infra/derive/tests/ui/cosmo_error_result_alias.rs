use cosmo_derive::cosmo_error;
use std::borrow::Cow;

#[cosmo_error(result_alias)]
pub enum AliasError {
    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn fails() -> Result<u8> {
    Err("nope".into())
}

fn main() {
    let err = fails().context("alias").unwrap_err();
    assert_eq!(err.to_string(), "Internal error (alias): nope");
}
