//! Facade crate for the cosmology I/O crates.
//! Re-exports the domain, kernel and converter crates and adds method-style
//! conversions on [`Cosmology`](kernel::cosmology::Cosmology).
//! Keep this crate thin: it composes other crates, it does not implement conversions.
//!
//! ```rust
//! use cosmo::prelude::*;
//!
//! let planck18 = cosmo::realizations::get("Planck18").unwrap();
//! let map = planck18.to_mapping(&ToMappingOptions::default());
//! let back = Cosmology::from_mapping(&map, &FromMappingOptions::default()).unwrap();
//! assert_eq!(back, planck18);
//! ```

pub use cosmo_domain as domain;
#[cfg(feature = "format")]
pub use cosmo_format as format;
pub use cosmo_kernel as kernel;
pub use cosmo_kernel::realizations;
pub use cosmo_mapping as mapping;

use cosmo_domain::mapping::Mapping;
use cosmo_kernel::cosmology::Cosmology;
use cosmo_kernel::registry::ClassRegistry;
use cosmo_mapping::{FromMappingOptions, MappingError, ToMappingOptions};

pub mod prelude {
    pub use crate::CosmologyIo;
    pub use cosmo_kernel::prelude::*;
    pub use cosmo_mapping::{ClassArg, ErrorKind, FromMappingOptions, MappingError, ToMappingOptions};

    #[cfg(feature = "format")]
    pub use cosmo_format::{FormatError, FormatRegistry, Payload};
}

/// Build-time enabled features (by Cargo feature).
pub mod features {
    pub const ENABLED: &[&str] = &[
        "mapping",
        #[cfg(feature = "format")]
        "format",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Conversions available as methods, resolved through the global registries.
pub trait CosmologyIo: Sized {
    fn to_mapping(&self, options: &ToMappingOptions) -> Mapping;

    /// # Errors
    /// See [`cosmo_mapping::from_mapping`].
    fn from_mapping(map: &Mapping, options: &FromMappingOptions) -> Result<Self, MappingError>;

    /// # Errors
    /// See [`cosmo_format::FormatRegistry::to_format`].
    #[cfg(feature = "format")]
    fn to_format(
        &self,
        format: &str,
        options: &ToMappingOptions,
    ) -> Result<cosmo_format::Payload, cosmo_format::FormatError>;

    /// # Errors
    /// See [`cosmo_format::FormatRegistry::from_format`].
    #[cfg(feature = "format")]
    fn from_format(
        input: &cosmo_format::Payload,
        format: Option<&str>,
        options: &FromMappingOptions,
    ) -> Result<Self, cosmo_format::FormatError>;
}

impl CosmologyIo for Cosmology {
    fn to_mapping(&self, options: &ToMappingOptions) -> Mapping {
        cosmo_mapping::to_mapping(self, options)
    }

    fn from_mapping(map: &Mapping, options: &FromMappingOptions) -> Result<Self, MappingError> {
        cosmo_mapping::from_mapping(map, options, ClassRegistry::global())
    }

    #[cfg(feature = "format")]
    fn to_format(
        &self,
        format: &str,
        options: &ToMappingOptions,
    ) -> Result<cosmo_format::Payload, cosmo_format::FormatError> {
        cosmo_format::to_format(self, format, options)
    }

    #[cfg(feature = "format")]
    fn from_format(
        input: &cosmo_format::Payload,
        format: Option<&str>,
        options: &FromMappingOptions,
    ) -> Result<Self, cosmo_format::FormatError> {
        cosmo_format::from_format(input, format, options)
    }
}
