//! Cosmology classes and the instances built from them.
//!
//! ```rust
//! use cosmo_kernel::realizations;
//!
//! let planck18 = realizations::get("Planck18").unwrap();
//! assert_eq!(planck18.class().qualname(), "FlatLambdaCDM");
//! assert_eq!(planck18.h0(), Some(67.66));
//! ```
//!
//! ## Config loading
//! ```rust,no_run
//! use cosmo_domain::config::CosmoConfig;
//! use cosmo_kernel::config::load_config;
//!
//! let cfg: CosmoConfig = load_config(None::<&str>).unwrap();
//! ```
pub mod class;
pub mod config;
pub mod cosmology;
mod error;
pub mod flrw;
pub mod parameter;
pub mod prelude;
pub mod realizations;
pub mod registry;

pub use crate::error::{CosmologyError, CosmologyErrorExt, Result};
pub use cosmo_domain as domain;
