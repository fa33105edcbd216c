//! Insertion-ordered property storage for objects and arrays.
//!
//! This module provides [`PropertyMap`], a wrapper around [`IndexMap`] keyed
//! by [`PropertyKey`] (a string or a [`Symbol`]). Insertion order is
//! preserved because it is the enumeration order the inspector renders:
//! string keys appear in the order they were inserted, and symbol keys are
//! always enumerated after every string key regardless of when they were
//! inserted.
//!
//! ## Examples
//!
//! ```rust
//! use console_inspect::{PropertyMap, Value};
//!
//! let mut map = PropertyMap::new();
//! map.insert("name".to_string(), Value::from("Alice"));
//! map.insert("age".to_string(), Value::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str().map(String::from)), Some("Alice".into()));
//! ```

use crate::{Symbol, Value};
use indexmap::IndexMap;
use std::hash::{Hash, Hasher};

/// A property key: an ordinary string key or an identity-based symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PropertyKey {
    String(String),
    Symbol(Symbol),
}

impl Hash for PropertyKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            PropertyKey::String(s) => {
                0u8.hash(state);
                s.hash(state);
            }
            PropertyKey::Symbol(sym) => {
                1u8.hash(state);
                sym.hash(state);
            }
        }
    }
}

/// An ordered map of property keys to values.
///
/// # Examples
///
/// ```rust
/// use console_inspect::{PropertyMap, Value};
///
/// let mut map = PropertyMap::new();
/// map.insert("first".to_string(), Value::from(1));
/// map.insert("second".to_string(), Value::from(2));
///
/// let keys: Vec<_> = map.string_entries().map(|(k, _)| k.to_string()).collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub struct PropertyMap(IndexMap<PropertyKey, Value>);

impl PropertyMap {
    /// Creates an empty `PropertyMap`.
    #[must_use]
    pub fn new() -> Self {
        PropertyMap(IndexMap::new())
    }

    /// Creates an empty `PropertyMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        PropertyMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a string-keyed property.
    ///
    /// If the map already contained this key, the old value is returned and
    /// the key keeps its original position.
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(PropertyKey::String(key), value)
    }

    /// Inserts a symbol-keyed property.
    pub fn insert_symbol(&mut self, key: Symbol, value: Value) -> Option<Value> {
        self.0.insert(PropertyKey::Symbol(key), value)
    }

    /// Returns a reference to the value stored under a string key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(&PropertyKey::String(key.to_string()))
    }

    /// Total number of properties, string and symbol keys combined.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map holds no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over string-keyed entries, in insertion order.
    pub fn string_entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().filter_map(|(k, v)| match k {
            PropertyKey::String(s) => Some((s.as_str(), v)),
            PropertyKey::Symbol(_) => None,
        })
    }

    /// Iterates over symbol-keyed entries, in insertion order.
    pub fn symbol_entries(&self) -> impl Iterator<Item = (&Symbol, &Value)> {
        self.0.iter().filter_map(|(k, v)| match k {
            PropertyKey::Symbol(sym) => Some((sym, v)),
            PropertyKey::String(_) => None,
        })
    }

    /// Iterates over all entries in raw insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, PropertyKey, Value> {
        self.0.iter()
    }
}

impl IntoIterator for PropertyMap {
    type Item = (PropertyKey, Value);
    type IntoIter = indexmap::map::IntoIter<PropertyKey, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, Value)> for PropertyMap {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        PropertyMap(
            iter.into_iter()
                .map(|(k, v)| (PropertyKey::String(k), v))
                .collect(),
        )
    }
}
