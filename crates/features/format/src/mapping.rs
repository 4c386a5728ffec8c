//! The `mapping` format: the in-memory key-value representation itself.

use crate::error::FormatError;
use crate::format::CosmologyFormat;
use crate::payload::Payload;
use cosmo_kernel::cosmology::Cosmology;
use cosmo_kernel::registry::ClassRegistry;
use cosmo_mapping::{FromMappingOptions, ToMappingOptions, from_mapping, to_mapping};

pub const NAME: &str = "mapping";

#[derive(Debug, Default, Clone, Copy)]
pub struct MappingFormat;

impl CosmologyFormat for MappingFormat {
    fn name(&self) -> &'static str {
        NAME
    }

    fn identify(&self, input: &Payload) -> bool {
        matches!(input, Payload::Mapping(_))
    }

    fn write(&self, cosmo: &Cosmology, options: &ToMappingOptions) -> Result<Payload, FormatError> {
        Ok(Payload::Mapping(to_mapping(cosmo, options)))
    }

    fn read(
        &self,
        input: &Payload,
        options: &FromMappingOptions,
        classes: &ClassRegistry,
    ) -> Result<Cosmology, FormatError> {
        let map = input.as_mapping().ok_or_else(|| FormatError::UnsupportedInput {
            format: NAME.into(),
            found: input.type_name().into(),
            context: None,
        })?;
        Ok(from_mapping(map, options, classes)?)
    }
}
