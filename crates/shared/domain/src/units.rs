//! Unit tags and unit-bearing values.
//!
//! Units here are labels, not a dimensional algebra: a [`Quantity`] carries a
//! magnitude and the [`Unit`] it was declared in, and two quantities are only
//! comparable when their units match exactly.

use crate::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

/// Units used by cosmological parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum Unit {
    #[strum(to_string = "", serialize = "dimensionless")]
    Dimensionless,
    #[strum(to_string = "K", serialize = "Kelvin")]
    Kelvin,
    #[strum(to_string = "km / (Mpc s)", serialize = "km/s/Mpc")]
    KmPerSecondPerMpc,
    #[strum(to_string = "eV")]
    ElectronVolt,
}

impl Unit {
    /// Parses a unit symbol (`"K"`, `"eV"`, `"km / (Mpc s)"`, ...).
    ///
    /// # Errors
    /// Returns [`DomainError::UnknownUnit`] for unsupported symbols.
    pub fn parse(symbol: &str) -> Result<Self, DomainError> {
        Self::from_str(symbol.trim()).map_err(|_| DomainError::UnknownUnit {
            name: symbol.to_owned().into(),
            context: None,
        })
    }
}

impl Serialize for Unit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Unit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let symbol = String::deserialize(deserializer)?;
        Self::parse(&symbol).map_err(serde::de::Error::custom)
    }
}

/// Numeric part of a [`Quantity`].
#[derive(Debug, Clone, PartialEq)]
pub enum Magnitude {
    Scalar(f64),
    Array(Vec<f64>),
}

impl Magnitude {
    #[must_use]
    pub const fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(v) => Some(*v),
            Self::Array(_) => None,
        }
    }

    /// Iterates over every element (a scalar yields itself once).
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        let slice = match self {
            Self::Scalar(v) => std::slice::from_ref(v),
            Self::Array(values) => values.as_slice(),
        };
        slice.iter().copied()
    }
}

impl From<f64> for Magnitude {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<f64>> for Magnitude {
    fn from(values: Vec<f64>) -> Self {
        Self::Array(values)
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(v) => write!(f, "{v}"),
            Self::Array(values) => {
                f.write_str("[")?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{v}")?;
                }
                f.write_str("]")
            },
        }
    }
}

/// A magnitude tagged with its unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    pub magnitude: Magnitude,
    pub unit: Unit,
}

impl Quantity {
    pub fn new(magnitude: impl Into<Magnitude>, unit: Unit) -> Self {
        Self { magnitude: magnitude.into(), unit }
    }

    #[must_use]
    pub const fn scalar(&self) -> Option<f64> {
        self.magnitude.as_scalar()
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            Unit::Dimensionless => write!(f, "{}", self.magnitude),
            unit => write!(f, "{} {unit}", self.magnitude),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_unit_parses_back_from_its_symbol() {
        for unit in Unit::iter() {
            assert_eq!(Unit::parse(&unit.to_string()).unwrap(), unit);
        }
    }

    #[test]
    fn aliases_are_accepted() {
        assert_eq!(Unit::parse("km/s/Mpc").unwrap(), Unit::KmPerSecondPerMpc);
        assert_eq!(Unit::parse(" K ").unwrap(), Unit::Kelvin);
        assert_eq!(Unit::parse("dimensionless").unwrap(), Unit::Dimensionless);
    }

    #[test]
    fn unknown_unit_is_reported() {
        let err = Unit::parse("parsec").unwrap_err();
        assert!(matches!(err, DomainError::UnknownUnit { .. }));
        assert!(err.to_string().contains("parsec"));
    }

    #[test]
    fn quantities_render_with_units() {
        assert_eq!(Quantity::new(2.7255, Unit::Kelvin).to_string(), "2.7255 K");
        assert_eq!(Quantity::new(vec![0.0, 0.06], Unit::ElectronVolt).to_string(), "[0, 0.06] eV");
        assert_eq!(Quantity::new(0.3, Unit::Dimensionless).to_string(), "0.3");
    }
}
