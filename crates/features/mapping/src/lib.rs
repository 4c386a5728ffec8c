//! Conversion between [`Cosmology`](cosmo_kernel::cosmology::Cosmology)
//! instances and their flat key-value representation.
//!
//! ```rust
//! use cosmo_kernel::prelude::ClassRegistry;
//! use cosmo_kernel::realizations;
//! use cosmo_mapping::{FromMappingOptions, ToMappingOptions, from_mapping, to_mapping};
//!
//! let planck18 = realizations::get("Planck18").unwrap();
//! let map = to_mapping(&planck18, &ToMappingOptions::default());
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Planck18"));
//!
//! let back = from_mapping(&map, &FromMappingOptions::default(), ClassRegistry::global()).unwrap();
//! assert_eq!(back, planck18);
//! ```

mod error;
pub mod export;
pub mod import;

pub use crate::error::{ErrorKind, MappingError, MappingErrorExt, Result};
pub use crate::export::{ToMappingOptions, to_mapping};
pub use crate::import::{ClassArg, FromMappingOptions, from_mapping};
