//! Core value types for raw manifest documents.

use indexmap::IndexMap;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Value represents a JSON/YAML value that can be any of the supported types.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Map(Map),
}

/// Map is a string-keyed map that remembers the order keys appeared in.
///
/// Setting an existing key replaces its value but keeps its position, so a
/// document with a duplicated key keeps the first position and the last value.
/// Scalar keys that are not strings (YAML allows `8080: web`) are stored in
/// their text form and the map records that it saw one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Map {
    fields: IndexMap<String, Value>,
    coerced_keys: bool,
}

impl Value {
    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Short name of the value's kind, used in log messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }
}

impl Map {
    pub fn new() -> Self {
        Map {
            fields: IndexMap::new(),
            coerced_keys: false,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn set(&mut self, key: String, value: Value) {
        self.fields.insert(key, value);
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns true if any key was a non-string scalar in the document.
    pub fn has_coerced_keys(&self) -> bool {
        self.coerced_keys
    }

    /// Iterates entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Serialize for Map {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

/// A mapping key as it appears in the document.
#[derive(Deserialize)]
#[serde(untagged)]
enum Key {
    String(String),
    Bool(bool),
    Int(i64),
    Float(f64),
    Null,
}

impl Key {
    fn into_string(self) -> (String, bool) {
        match self {
            Key::String(s) => (s, false),
            Key::Bool(b) => (b.to_string(), true),
            Key::Int(i) => (i.to_string(), true),
            Key::Float(f) => (f.to_string(), true),
            Key::Null => ("null".to_string(), true),
        }
    }
}

impl<'de> Deserialize<'de> for Map {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MapVisitor;

        impl<'de> Visitor<'de> for MapVisitor {
            type Value = Map;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map with scalar keys")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Map, A::Error> {
                let mut map = Map::new();
                while let Some((key, value)) = access.next_entry::<Key, Value>()? {
                    let (key, coerced) = key.into_string();
                    map.coerced_keys |= coerced;
                    map.set(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(MapVisitor)
    }
}
