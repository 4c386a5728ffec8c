use crate::error::FormatError;
use crate::payload::Payload;
use cosmo_kernel::cosmology::Cosmology;
use cosmo_kernel::registry::ClassRegistry;
use cosmo_mapping::{FromMappingOptions, ToMappingOptions};
use std::fmt;

/// A named reader/writer pair for cosmologies.
pub trait CosmologyFormat: fmt::Debug + Send + Sync {
    /// Name the format is registered and selected under.
    fn name(&self) -> &'static str;

    /// Whether `input` looks like this format. Used when no format is named.
    fn identify(&self, input: &Payload) -> bool;

    /// # Errors
    /// Format specific; see the implementors.
    fn write(&self, cosmo: &Cosmology, options: &ToMappingOptions) -> Result<Payload, FormatError>;

    /// # Errors
    /// Format specific; see the implementors.
    fn read(
        &self,
        input: &Payload,
        options: &FromMappingOptions,
        classes: &ClassRegistry,
    ) -> Result<Cosmology, FormatError>;
}
