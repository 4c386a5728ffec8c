//! # Domain Models
//!
//! Pure data types shared by the cosmology I/O crates: units and quantities,
//! dynamically typed values, the key-value [`mapping::Mapping`], reserved keys
//! and configuration structs.
//! Keep it lean: no I/O and no conversion policy, just data and simple helpers.

pub mod class;
pub mod config;
pub mod constants;
mod error;
pub mod mapping;
pub mod units;
pub mod value;

pub use crate::error::{DomainError, DomainErrorExt};
