//! Declared parameters of a cosmology class.
//!
//! A [`ParameterSpec`] is the static replacement for reading a constructor's
//! signature at runtime: it names the parameter, the unit its values carry,
//! its default and the validation applied on construction.

use crate::error::CosmologyError;
use cosmo_domain::units::{Magnitude, Quantity, Unit};
use cosmo_domain::value::Value;
use std::borrow::Cow;

/// Default of a constructor parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterDefault {
    /// The caller must supply a value.
    Required,
    Value(Value),
}

/// Checks applied to a parameter value after unit normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validator {
    /// Any finite number (scalar or array).
    #[default]
    Finite,
    /// Finite and `>= 0` elementwise.
    NonNegative,
    /// `None`, or finite and `>= 0`.
    NonNegativeOrNone,
}

/// Specification of one declared parameter.
#[derive(Debug, Clone)]
pub struct ParameterSpec {
    name: Cow<'static, str>,
    unit: Option<Unit>,
    default: ParameterDefault,
    validator: Validator,
    doc: Cow<'static, str>,
}

impl ParameterSpec {
    /// A parameter without a default.
    pub fn required(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            unit: None,
            default: ParameterDefault::Required,
            validator: Validator::default(),
            doc: Cow::Borrowed(""),
        }
    }

    /// A parameter that falls back to `default` when omitted.
    pub fn optional(name: impl Into<Cow<'static, str>>, default: impl Into<Value>) -> Self {
        Self { default: ParameterDefault::Value(default.into()), ..Self::required(name) }
    }

    #[must_use]
    pub const fn unit(mut self, unit: Unit) -> Self {
        self.unit = Some(unit);
        self
    }

    #[must_use]
    pub const fn validator(mut self, validator: Validator) -> Self {
        self.validator = validator;
        self
    }

    #[must_use]
    pub fn doc(mut self, doc: impl Into<Cow<'static, str>>) -> Self {
        self.doc = doc.into();
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn declared_unit(&self) -> Option<Unit> {
        self.unit
    }

    #[must_use]
    pub const fn default_value(&self) -> &ParameterDefault {
        &self.default
    }

    #[must_use]
    pub const fn is_required(&self) -> bool {
        matches!(self.default, ParameterDefault::Required)
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.doc
    }

    /// Attaches the declared unit to bare numbers and validates the result.
    ///
    /// Unit-bearing parameters are stored as [`Value::Quantity`], dimensionless
    /// ones as [`Value::Float`].
    ///
    /// # Errors
    /// * [`CosmologyError::UnitMismatch`] for a quantity in another unit.
    /// * [`CosmologyError::InvalidParameter`] for non-numeric values or a failed check.
    pub fn normalize(&self, value: Value) -> Result<Value, CosmologyError> {
        if value.is_none() {
            return match (&self.default, self.validator) {
                (_, Validator::NonNegativeOrNone) | (ParameterDefault::Value(Value::None), _) => {
                    Ok(Value::None)
                },
                _ => Err(self.invalid("must not be None")),
            };
        }

        let expected = self.unit.unwrap_or(Unit::Dimensionless);
        let magnitude = match value {
            #[allow(clippy::cast_precision_loss)]
            Value::Int(v) => Magnitude::Scalar(v as f64),
            Value::Float(v) => Magnitude::Scalar(v),
            Value::List(items) => Magnitude::Array(
                items.iter().map(|item| self.element(item, expected)).collect::<Result<_, _>>()?,
            ),
            Value::Quantity(q) if q.unit == expected => q.magnitude,
            Value::Quantity(q) => return Err(self.unit_mismatch(expected, q.unit)),
            other => {
                return Err(self.invalid(format!("expected a number, got {}", other.type_name())));
            },
        };

        self.check(&magnitude)?;

        Ok(match (self.unit, magnitude) {
            (Some(unit), magnitude) => Value::Quantity(Quantity { magnitude, unit }),
            (None, Magnitude::Scalar(v)) => Value::Float(v),
            (None, Magnitude::Array(values)) => {
                Value::List(values.into_iter().map(Value::Float).collect())
            },
        })
    }

    /// One list element: a bare number, or a scalar quantity in `expected`.
    fn element(&self, item: &Value, expected: Unit) -> Result<f64, CosmologyError> {
        match item {
            #[allow(clippy::cast_precision_loss)]
            Value::Int(v) => Ok(*v as f64),
            Value::Float(v) => Ok(*v),
            Value::Quantity(q) if q.unit != expected => Err(self.unit_mismatch(expected, q.unit)),
            Value::Quantity(q) => q.scalar().ok_or_else(|| self.invalid("expected scalar elements")),
            other => Err(self.invalid(format!("expected numbers, got {}", other.type_name()))),
        }
    }

    fn unit_mismatch(&self, expected: Unit, found: Unit) -> CosmologyError {
        CosmologyError::UnitMismatch { name: self.name.clone(), expected, found, context: None }
    }

    fn check(&self, magnitude: &Magnitude) -> Result<(), CosmologyError> {
        if !magnitude.values().all(f64::is_finite) {
            return Err(self.invalid("must be finite"));
        }
        let non_negative =
            matches!(self.validator, Validator::NonNegative | Validator::NonNegativeOrNone);
        if non_negative && magnitude.values().any(|v| v < 0.0) {
            return Err(self.invalid("must be non-negative"));
        }
        Ok(())
    }

    fn invalid(&self, message: impl Into<Cow<'static, str>>) -> CosmologyError {
        CosmologyError::InvalidParameter {
            name: self.name.clone(),
            message: message.into(),
            context: None,
        }
    }
}
