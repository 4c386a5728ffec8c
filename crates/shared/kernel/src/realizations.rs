//! Published cosmologies available by name.

use crate::cosmology::Cosmology;
use crate::error::CosmologyError;
use crate::flrw;
use cosmo_domain::mapping::Mapping;
use cosmo_domain::value::Value;

struct Realization {
    name: &'static str,
    h0: f64,
    om0: f64,
    ob0: f64,
    tcmb0: f64,
    neff: f64,
    m_nu: &'static [f64],
    oc0: f64,
    n: f64,
    sigma8: f64,
    tau: f64,
    z_reion: f64,
    t0: f64,
    reference: &'static str,
}

const PLANCK_M_NU: &[f64] = &[0.0, 0.0, 0.06];

const REALIZATIONS: &[Realization] = &[
    Realization {
        name: "Planck13",
        h0: 67.77,
        om0: 0.30712,
        ob0: 0.048_252,
        tcmb0: 2.7255,
        neff: 3.046,
        m_nu: PLANCK_M_NU,
        oc0: 0.25886,
        n: 0.9611,
        sigma8: 0.8288,
        tau: 0.0952,
        z_reion: 11.52,
        t0: 13.7965,
        reference: "Planck Collaboration 2014, A&A, 571, A16 (Paper XVI), Table 5 (Planck + WP + highL + BAO)",
    },
    Realization {
        name: "Planck15",
        h0: 67.74,
        om0: 0.3075,
        ob0: 0.0486,
        tcmb0: 2.7255,
        neff: 3.046,
        m_nu: PLANCK_M_NU,
        oc0: 0.2589,
        n: 0.9667,
        sigma8: 0.8159,
        tau: 0.066,
        z_reion: 8.8,
        t0: 13.799,
        reference: "Planck Collaboration 2016, A&A, 594, A13 (Paper XIII), Table 4 (TT, TE, EE + lowP + lensing + ext)",
    },
    Realization {
        name: "Planck18",
        h0: 67.66,
        om0: 0.30966,
        ob0: 0.04897,
        tcmb0: 2.7255,
        neff: 3.046,
        m_nu: PLANCK_M_NU,
        oc0: 0.2607,
        n: 0.9665,
        sigma8: 0.8102,
        tau: 0.0561,
        z_reion: 7.82,
        t0: 13.787,
        reference: "Planck Collaboration 2018, 2020, A&A, 641, A6 (Paper VI), Table 2 (TT, TE, EE + lowE + lensing + BAO)",
    },
    Realization {
        name: "WMAP5",
        h0: 70.2,
        om0: 0.277,
        ob0: 0.0459,
        tcmb0: 2.725,
        neff: 3.04,
        m_nu: &[0.0],
        oc0: 0.231,
        n: 0.962,
        sigma8: 0.817,
        tau: 0.088,
        z_reion: 11.3,
        t0: 13.72,
        reference: "Komatsu et al. 2009, ApJS, 180, 330, doi: 10.1088/0067-0049/180/2/330. Table 1 (WMAP + BAO + SN ML).",
    },
    Realization {
        name: "WMAP7",
        h0: 70.4,
        om0: 0.272,
        ob0: 0.0455,
        tcmb0: 2.725,
        neff: 3.04,
        m_nu: &[0.0],
        oc0: 0.226,
        n: 0.967,
        sigma8: 0.810,
        tau: 0.085,
        z_reion: 10.3,
        t0: 13.76,
        reference: "Komatsu et al. 2011, ApJS, 192, 18, doi: 10.1088/0067-0049/192/2/18. Table 1 (WMAP + BAO + H0 ML).",
    },
    Realization {
        name: "WMAP9",
        h0: 69.32,
        om0: 0.2865,
        ob0: 0.04628,
        tcmb0: 2.725,
        neff: 3.04,
        m_nu: &[0.0],
        oc0: 0.2402,
        n: 0.9608,
        sigma8: 0.820,
        tau: 0.081,
        z_reion: 10.1,
        t0: 13.772,
        reference: "Hinshaw et al. 2013, ApJS, 208, 19, doi: 10.1088/0067-0049/208/2/19. Table 4 (WMAP9 + eCMB + BAO + H0, last column)",
    },
];

/// Names of all realizations, in publication order.
pub fn available() -> impl Iterator<Item = &'static str> {
    REALIZATIONS.iter().map(|r| r.name)
}

/// Builds the realization published under `name`.
///
/// # Errors
/// Returns [`CosmologyError::UnknownRealization`] for unknown names.
pub fn get(name: &str) -> Result<Cosmology, CosmologyError> {
    let realization = REALIZATIONS.iter().find(|r| r.name == name).ok_or_else(|| {
        CosmologyError::UnknownRealization { name: name.to_owned().into(), context: None }
    })?;
    build(realization)
}

/// Builds every realization.
///
/// # Errors
/// Propagates construction failures.
pub fn all() -> Result<Vec<Cosmology>, CosmologyError> {
    REALIZATIONS.iter().map(build).collect()
}

fn build(r: &Realization) -> Result<Cosmology, CosmologyError> {
    let m_nu = match r.m_nu {
        [single] => Value::Float(*single),
        many => Value::List(many.iter().copied().map(Value::Float).collect()),
    };

    let mut meta = Mapping::default();
    meta.insert("Oc0", r.oc0);
    meta.insert("n", r.n);
    meta.insert("sigma8", r.sigma8);
    meta.insert("tau", r.tau);
    meta.insert("z_reion", r.z_reion);
    meta.insert("t0", r.t0);
    meta.insert("reference", r.reference);
    meta.insert("flat", true);

    let mut kwargs = Mapping::default();
    kwargs.insert("H0", r.h0);
    kwargs.insert("Om0", r.om0);
    kwargs.insert("Tcmb0", r.tcmb0);
    kwargs.insert("Neff", r.neff);
    kwargs.insert("m_nu", m_nu);
    kwargs.insert("Ob0", r.ob0);
    kwargs.insert("name", r.name);
    kwargs.insert("meta", meta);

    flrw::flat_lambda_cdm().construct(kwargs)
}
