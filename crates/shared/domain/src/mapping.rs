//! Key-value mapping representation of a cosmology.

use crate::error::DomainError;
use crate::value::Value;
use indexmap::IndexMap;
use indexmap::map::{IntoIter, Iter};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Which mapping constructor produced a [`Mapping`].
///
/// Both kinds keep insertion order; they differ in equality. Two `OrderedDict`
/// mappings are equal only if their entries appear in the same order, any
/// other pairing compares entries regardless of order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MappingKind {
    #[default]
    Dict,
    OrderedDict,
}

impl MappingKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dict => "dict",
            Self::OrderedDict => "OrderedDict",
        }
    }
}

impl FromStr for MappingKind {
    type Err = DomainError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "dict" | "Dict" => Ok(Self::Dict),
            "OrderedDict" | "ordered_dict" | "ordered" => Ok(Self::OrderedDict),
            other => {
                Err(DomainError::InvalidMappingKind { name: other.to_owned().into(), context: None })
            },
        }
    }
}

impl fmt::Display for MappingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for MappingKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MappingKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// An insertion-ordered string-keyed mapping of [`Value`]s.
#[derive(Debug, Clone, Default)]
pub struct Mapping {
    kind: MappingKind,
    entries: IndexMap<String, Value>,
}

impl Mapping {
    #[must_use]
    pub fn new(kind: MappingKind) -> Self {
        Self { kind, entries: IndexMap::new() }
    }

    #[must_use]
    pub fn with_capacity(kind: MappingKind, capacity: usize) -> Self {
        Self { kind, entries: IndexMap::with_capacity(capacity) }
    }

    #[must_use]
    pub const fn kind(&self) -> MappingKind {
        self.kind
    }

    /// Inserts or replaces an entry, returning the previous value.
    ///
    /// A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes an entry and keeps the order of the remaining ones.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> Iter<'_, String, Value> {
        self.entries.iter()
    }

    /// Copies entries from `other`; existing keys are overwritten in place.
    pub fn extend(&mut self, other: impl IntoIterator<Item = (String, Value)>) {
        self.entries.extend(other);
    }
}

impl PartialEq for Mapping {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        if self.kind == MappingKind::OrderedDict && other.kind == MappingKind::OrderedDict {
            return self.entries.iter().eq(other.entries.iter());
        }
        self.entries.iter().all(|(k, v)| other.entries.get(k).is_some_and(|o| o == v))
    }
}

impl FromIterator<(String, Value)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self { kind: MappingKind::Dict, entries: iter.into_iter().collect() }
    }
}

impl IntoIterator for Mapping {
    type Item = (String, Value);
    type IntoIter = IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = (&'a String, &'a Value);
    type IntoIter = Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind == MappingKind::OrderedDict {
            f.write_str("OrderedDict(")?;
        }
        f.write_str("{")?;
        for (i, (k, v)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{k}': {v}")?;
        }
        f.write_str("}")?;
        if self.kind == MappingKind::OrderedDict {
            f.write_str(")")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(kind: MappingKind, keys: &[&str]) -> Mapping {
        let mut m = Mapping::new(kind);
        for (i, key) in keys.iter().enumerate() {
            m.insert(*key, i64::try_from(i).unwrap());
        }
        m
    }

    #[test]
    fn kind_parses_mapping_constructors_only() {
        assert_eq!("dict".parse::<MappingKind>().unwrap(), MappingKind::Dict);
        assert_eq!("OrderedDict".parse::<MappingKind>().unwrap(), MappingKind::OrderedDict);

        let err = "list".parse::<MappingKind>().unwrap_err();
        assert!(err.to_string().starts_with("'cls' must be"));
    }

    #[test]
    fn ordered_equality_is_order_sensitive() {
        let mut a = Mapping::new(MappingKind::OrderedDict);
        a.insert("x", 1_i64);
        a.insert("y", 2_i64);
        let mut b = Mapping::new(MappingKind::OrderedDict);
        b.insert("y", 2_i64);
        b.insert("x", 1_i64);
        assert_ne!(a, b);

        let mut c = Mapping::new(MappingKind::Dict);
        c.insert("y", 2_i64);
        c.insert("x", 1_i64);
        assert_eq!(a, c);
        assert_eq!(c, a);
    }

    #[test]
    fn remove_keeps_remaining_order() {
        let mut m = entries(MappingKind::Dict, &["a", "b", "c"]);
        assert_eq!(m.remove("b"), Some(Value::Int(1)));
        assert_eq!(m.keys().collect::<Vec<_>>(), ["a", "c"]);
        assert_eq!(m.remove("b"), None);
    }

    #[test]
    fn display_follows_kind() {
        let m = entries(MappingKind::OrderedDict, &["a"]);
        assert_eq!(m.to_string(), "OrderedDict({'a': 0})");
        let m = entries(MappingKind::Dict, &["a"]);
        assert_eq!(m.to_string(), "{'a': 0}");
    }
}
