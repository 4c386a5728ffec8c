#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the cosmology I/O workspace.
//!
//! The only macro today is [`macro@cosmo_error`], which wires an error enum into
//! the workspace conventions (context strings, `?` conversions, result alias).
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! cosmo-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining crate-level error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `<ErrorName>Ext` trait that adds `.context()`
///   to `Result<T, ErrorName>` and to `Result<T, Source>` for every source-carrying variant.
/// * **Standard Conversions**: Implements `From<Source>` for variants with a `source` field
///   (or a field marked `#[source]`/`#[from]`), so `?` works on upstream errors.
/// * **Internal Fallback**: Provides `From<&'static str>` and `From<String>` when an
///   `Internal` variant is present.
/// * **Result Alias**: With `#[cosmo_error(result_alias)]`, emits
///   `pub type Result<T, E = ErrorName> = std::result::Result<T, E>;` next to the enum.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with named-field variants only.
/// 2. A `context` field, when present, must be `Option<Cow<'static, str>>`.
/// 3. Variants with a source must also carry a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use cosmo_derive::cosmo_error;
/// use std::borrow::Cow;
///
/// #[cosmo_error(result_alias)]
/// pub enum ReadError {
///     #[error("Malformed JSON{}: {source}", format_context(.context))]
///     Json { source: serde_json::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn parse(raw: &str) -> Result<serde_json::Value> {
///     serde_json::from_str(raw).context("Parsing cosmology document")
/// }
/// ```
#[proc_macro_attribute]
pub fn cosmo_error(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(args.into(), input).into()
}
