//! Runtime variable store

use num_bigint::BigInt;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// Insertion-ordered variable store
///
/// Names keep the position of their first assignment; later assignments
/// overwrite the value in place. Values are unbounded integers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Variables {
    entries: Vec<(String, BigInt)>,
    index: HashMap<String, usize>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&BigInt> {
        self.index.get(name).map(|&i| &self.entries[i].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn set(&mut self, name: &str, value: impl Into<BigInt>) {
        let value = value.into();
        match self.index.get(name) {
            Some(&i) => self.entries[i].1 = value,
            None => {
                self.index.insert(name.to_string(), self.entries.len());
                self.entries.push((name.to_string(), value));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(name, value)` pairs in first-assignment order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BigInt)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<'a, V: Into<BigInt>> FromIterator<(&'a str, V)> for Variables {
    fn from_iter<I: IntoIterator<Item = (&'a str, V)>>(iter: I) -> Self {
        let mut vars = Variables::new();
        for (name, value) in iter {
            vars.set(name, value);
        }
        vars
    }
}

/// Serializes as a map whose keys appear in insertion order
///
/// Values within the `i64` range are written as numbers, larger ones as
/// decimal strings so JSON readers don't lose precision.
impl Serialize for Variables {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            match i64::try_from(value) {
                Ok(small) => map.serialize_entry(name, &small)?,
                Err(_) => map.serialize_entry(name, &value.to_string())?,
            }
        }
        map.end()
    }
}
