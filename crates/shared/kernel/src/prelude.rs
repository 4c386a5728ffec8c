pub use crate::class::{CosmologyClass, CosmologyClassBuilder};
pub use crate::cosmology::Cosmology;
pub use crate::error::{CosmologyError, CosmologyErrorExt};
pub use crate::parameter::{ParameterDefault, ParameterSpec, Validator};
pub use crate::registry::ClassRegistry;
pub use cosmo_domain::mapping::{Mapping, MappingKind};
pub use cosmo_domain::units::{Quantity, Unit};
pub use cosmo_domain::value::Value;
