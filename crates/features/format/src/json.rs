//! The `json` format: the mapping representation as a JSON object.
//!
//! Class references are written as qualified names and quantities as
//! `{"value": .., "unit": ".."}` objects. On read, such an object becomes a
//! quantity again when it sits directly under a top-level key. Everything
//! nested under `meta` is decoded verbatim, so metadata round-trips as
//! written.

use crate::error::FormatError;
use crate::format::CosmologyFormat;
use crate::payload::Payload;
use cosmo_domain::constants::META;
use cosmo_domain::mapping::Mapping;
use cosmo_domain::units::{Magnitude, Quantity, Unit};
use cosmo_domain::value::Value;
use cosmo_kernel::cosmology::Cosmology;
use cosmo_kernel::registry::ClassRegistry;
use cosmo_mapping::{FromMappingOptions, ToMappingOptions, from_mapping, to_mapping};
use serde_json::{Map as JsonMap, Number, Value as Json};

pub const NAME: &str = "json";

const QUANTITY_VALUE: &str = "value";
const QUANTITY_UNIT: &str = "unit";

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFormat {
    /// Indent the output.
    pub pretty: bool,
}

impl CosmologyFormat for JsonFormat {
    fn name(&self) -> &'static str {
        NAME
    }

    fn identify(&self, input: &Payload) -> bool {
        input.as_text().is_some_and(|text| text.trim_start().starts_with('{'))
    }

    /// Writes the mapping representation as a JSON object string. The
    /// mapping kind is irrelevant here; JSON objects keep insertion order.
    fn write(&self, cosmo: &Cosmology, options: &ToMappingOptions) -> Result<Payload, FormatError> {
        let json = to_json(&Value::Map(to_mapping(cosmo, options)))?;
        let text = if self.pretty {
            serde_json::to_string_pretty(&json)?
        } else {
            serde_json::to_string(&json)?
        };
        Ok(Payload::Text(text))
    }

    fn read(
        &self,
        input: &Payload,
        options: &FromMappingOptions,
        classes: &ClassRegistry,
    ) -> Result<Cosmology, FormatError> {
        let text = input.as_text().ok_or_else(|| FormatError::UnsupportedInput {
            format: NAME.into(),
            found: input.type_name().into(),
            context: None,
        })?;
        let json: Json = serde_json::from_str(text)?;
        let Json::Object(object) = json else {
            return Err(FormatError::UnsupportedInput {
                format: NAME.into(),
                found: "non-object JSON".into(),
                context: None,
            });
        };
        Ok(from_mapping(&document(object), options, classes)?)
    }
}

/// Converts a value to JSON.
///
/// # Errors
/// Returns [`FormatError::UnsupportedValue`] for non-finite floats, which JSON cannot hold.
pub fn to_json(value: &Value) -> Result<Json, FormatError> {
    Ok(match value {
        Value::None => Json::Null,
        Value::Bool(b) => Json::Bool(*b),
        Value::Int(i) => Json::Number((*i).into()),
        Value::Float(f) => float(*f)?,
        Value::Str(s) => Json::String(s.clone()),
        Value::Quantity(q) => {
            let magnitude = match &q.magnitude {
                Magnitude::Scalar(v) => float(*v)?,
                Magnitude::Array(values) => {
                    Json::Array(values.iter().map(|v| float(*v)).collect::<Result<_, _>>()?)
                },
            };
            let mut object = JsonMap::with_capacity(2);
            object.insert(QUANTITY_VALUE.to_owned(), magnitude);
            object.insert(QUANTITY_UNIT.to_owned(), Json::String(q.unit.to_string()));
            Json::Object(object)
        },
        Value::List(items) => Json::Array(items.iter().map(to_json).collect::<Result<_, _>>()?),
        Value::Map(map) => {
            let mut object = JsonMap::with_capacity(map.len());
            for (key, value) in map {
                object.insert(key.clone(), to_json(value)?);
            }
            Json::Object(object)
        },
        Value::Class(class) => Json::String(class.qualname().to_owned()),
    })
}

/// Converts JSON back to a value. Objects become
/// [`Mapping`](cosmo_domain::mapping::Mapping)s of the default kind.
#[must_use]
pub fn from_json(json: Json) -> Value {
    match json {
        Json::Null => Value::None,
        Json::Bool(b) => Value::Bool(b),
        Json::Number(n) => match n.as_i64() {
            Some(i) => Value::Int(i),
            None => n.as_f64().map_or(Value::None, Value::Float),
        },
        Json::String(s) => Value::Str(s),
        Json::Array(items) => Value::List(items.into_iter().map(from_json).collect()),
        Json::Object(object) => match quantity(&object) {
            Some(q) => Value::Quantity(q),
            None => Value::Map(object.into_iter().map(|(k, v)| (k, from_json(v))).collect()),
        },
    }
}

/// Decodes a top-level JSON document into the mapping representation.
fn document(object: JsonMap<String, Json>) -> Mapping {
    object
        .into_iter()
        .map(|(key, value)| {
            let value = if key == META { verbatim(value) } else { from_json(value) };
            (key, value)
        })
        .collect()
}

/// Like [`from_json`], without quantity detection.
fn verbatim(json: Json) -> Value {
    match json {
        Json::Array(items) => Value::List(items.into_iter().map(verbatim).collect()),
        Json::Object(object) => {
            Value::Map(object.into_iter().map(|(k, v)| (k, verbatim(v))).collect())
        },
        scalar => from_json(scalar),
    }
}

fn float(value: f64) -> Result<Json, FormatError> {
    Number::from_f64(value).map(Json::Number).ok_or_else(|| FormatError::UnsupportedValue {
        message: format!("{value} is not a finite number").into(),
        context: None,
    })
}

fn quantity(object: &JsonMap<String, Json>) -> Option<Quantity> {
    if object.len() != 2 {
        return None;
    }
    let unit = Unit::parse(object.get(QUANTITY_UNIT)?.as_str()?).ok()?;
    let magnitude = match object.get(QUANTITY_VALUE)? {
        Json::Number(n) => Magnitude::Scalar(n.as_f64()?),
        Json::Array(items) => {
            Magnitude::Array(items.iter().map(Json::as_f64).collect::<Option<_>>()?)
        },
        _ => return None,
    };
    Some(Quantity { magnitude, unit })
}
