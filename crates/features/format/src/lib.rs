//! Read and write cosmologies by format name.
//!
//! ```rust
//! use cosmo_format::{Payload, from_format, to_format};
//! use cosmo_kernel::realizations;
//! use cosmo_mapping::{FromMappingOptions, ToMappingOptions};
//!
//! let wmap9 = realizations::get("WMAP9").unwrap();
//! let json = to_format(&wmap9, "json", &ToMappingOptions::default()).unwrap();
//! assert!(matches!(json, Payload::Text(_)));
//!
//! let back = from_format(&json, None, &FromMappingOptions::default()).unwrap();
//! assert_eq!(back, wmap9);
//! ```

mod error;
pub mod format;
pub mod json;
pub mod mapping;
mod payload;
mod registry;

pub use crate::error::{FormatError, FormatErrorExt, Result};
pub use crate::format::CosmologyFormat;
pub use crate::payload::Payload;
pub use crate::registry::FormatRegistry;

use cosmo_kernel::cosmology::Cosmology;
use cosmo_kernel::registry::ClassRegistry;
use cosmo_mapping::{FromMappingOptions, ToMappingOptions};

/// Writes `cosmo` through the global [`FormatRegistry`].
///
/// # Errors
/// See [`FormatRegistry::to_format`].
pub fn to_format(
    cosmo: &Cosmology,
    format: &str,
    options: &ToMappingOptions,
) -> Result<Payload, FormatError> {
    FormatRegistry::global().to_format(cosmo, format, options)
}

/// Reads a cosmology through the global format and class registries.
///
/// # Errors
/// See [`FormatRegistry::from_format`].
pub fn from_format(
    input: &Payload,
    format: Option<&str>,
    options: &FromMappingOptions,
) -> Result<Cosmology, FormatError> {
    FormatRegistry::global().from_format(input, format, options, ClassRegistry::global())
}
