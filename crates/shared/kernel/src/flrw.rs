//! Built-in FLRW cosmology classes.
//!
//! Only the signatures are modelled: parameter names, units, defaults and
//! validation. No distance or age calculations are provided.

use crate::class::CosmologyClass;
use crate::parameter::{ParameterSpec, Validator};
use cosmo_domain::units::Unit;
use cosmo_domain::value::Value;
use std::sync::{Arc, LazyLock};

pub const FLAT_LAMBDA_CDM: &str = "FlatLambdaCDM";
pub const LAMBDA_CDM: &str = "LambdaCDM";
pub const W_CDM: &str = "wCDM";
pub const FLAT_W_CDM: &str = "FlatwCDM";

static FLAT_LAMBDA_CDM_CLASS: LazyLock<Arc<CosmologyClass>> =
    LazyLock::new(|| flrw_class(FLAT_LAMBDA_CDM, false, false));
static LAMBDA_CDM_CLASS: LazyLock<Arc<CosmologyClass>> =
    LazyLock::new(|| flrw_class(LAMBDA_CDM, true, false));
static W_CDM_CLASS: LazyLock<Arc<CosmologyClass>> =
    LazyLock::new(|| flrw_class(W_CDM, true, true));
static FLAT_W_CDM_CLASS: LazyLock<Arc<CosmologyClass>> =
    LazyLock::new(|| flrw_class(FLAT_W_CDM, false, true));

/// Flat ΛCDM: `(H0, Om0, Tcmb0=0 K, Neff=3.04, m_nu=0 eV, Ob0=None)`.
pub fn flat_lambda_cdm() -> Arc<CosmologyClass> {
    Arc::clone(&FLAT_LAMBDA_CDM_CLASS)
}

/// ΛCDM with curvature: `(H0, Om0, Ode0, Tcmb0, Neff, m_nu, Ob0)`.
pub fn lambda_cdm() -> Arc<CosmologyClass> {
    Arc::clone(&LAMBDA_CDM_CLASS)
}

/// Constant dark-energy equation of state: `(H0, Om0, Ode0, w0=-1, Tcmb0, Neff, m_nu, Ob0)`.
pub fn w_cdm() -> Arc<CosmologyClass> {
    Arc::clone(&W_CDM_CLASS)
}

/// Flat `wCDM`: `(H0, Om0, w0=-1, Tcmb0, Neff, m_nu, Ob0)`.
pub fn flat_w_cdm() -> Arc<CosmologyClass> {
    Arc::clone(&FLAT_W_CDM_CLASS)
}

pub fn builtin_classes() -> [Arc<CosmologyClass>; 4] {
    [flat_lambda_cdm(), lambda_cdm(), w_cdm(), flat_w_cdm()]
}

fn flrw_class(qualname: &'static str, curved: bool, dark_energy_w: bool) -> Arc<CosmologyClass> {
    let mut builder = CosmologyClass::builder(qualname)
        .parameter(
            ParameterSpec::required("H0")
                .unit(Unit::KmPerSecondPerMpc)
                .doc("Hubble constant at z=0."),
        )
        .parameter(
            ParameterSpec::required("Om0")
                .validator(Validator::NonNegative)
                .doc("Omega matter; matter density/critical density at z=0."),
        );

    if curved {
        builder = builder.parameter(
            ParameterSpec::required("Ode0").doc("Omega dark energy; dark energy density/critical density at z=0."),
        );
    }
    if dark_energy_w {
        builder = builder.parameter(
            ParameterSpec::optional("w0", -1.0).doc("Dark energy equation of state."),
        );
    }

    builder
        .parameter(
            ParameterSpec::optional("Tcmb0", 0.0)
                .unit(Unit::Kelvin)
                .validator(Validator::NonNegative)
                .doc("Temperature of the CMB at z=0."),
        )
        .parameter(
            ParameterSpec::optional("Neff", 3.04)
                .validator(Validator::NonNegative)
                .doc("Number of effective neutrino species."),
        )
        .parameter(
            ParameterSpec::optional("m_nu", 0.0)
                .unit(Unit::ElectronVolt)
                .validator(Validator::NonNegative)
                .doc("Mass of each neutrino species."),
        )
        .parameter(
            ParameterSpec::optional("Ob0", Value::None)
                .validator(Validator::NonNegativeOrNone)
                .doc("Omega baryon; baryonic matter density/critical density at z=0."),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameter::ParameterDefault;

    fn names(class: &CosmologyClass) -> Vec<&str> {
        class.parameters().iter().map(ParameterSpec::name).collect()
    }

    #[test]
    fn signatures_follow_the_flrw_family() {
        assert_eq!(names(&flat_lambda_cdm()), ["H0", "Om0", "Tcmb0", "Neff", "m_nu", "Ob0"]);
        assert_eq!(names(&lambda_cdm()), ["H0", "Om0", "Ode0", "Tcmb0", "Neff", "m_nu", "Ob0"]);
        assert_eq!(
            names(&w_cdm()),
            ["H0", "Om0", "Ode0", "w0", "Tcmb0", "Neff", "m_nu", "Ob0"]
        );
        assert_eq!(names(&flat_w_cdm()), ["H0", "Om0", "w0", "Tcmb0", "Neff", "m_nu", "Ob0"]);
    }

    #[test]
    fn tcmb0_defaults_to_zero_kelvin() {
        let class = flat_lambda_cdm();
        let spec = class.parameter("Tcmb0").unwrap();
        assert_eq!(spec.default_value(), &ParameterDefault::Value(Value::Float(0.0)));
        assert_eq!(spec.declared_unit(), Some(Unit::Kelvin));
    }

    #[test]
    fn classes_are_shared() {
        assert!(Arc::ptr_eq(&flat_lambda_cdm(), &flat_lambda_cdm()));
        assert!(!flat_lambda_cdm().accepts_extra_kwargs());
    }
}
