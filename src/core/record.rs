//! Record access for the table engine
//!
//! The table engine never inspects concrete types. Anything that can hand
//! out its fields as JSON values by name is a [`Record`], and nested fields
//! are reached through a dotted [`FieldPath`].

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;

/// A dotted field name such as `model.name`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// Parse a dotted path, dropping empty segments
    pub fn parse(path: &str) -> Self {
        Self {
            segments: path
                .split('.')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
        }
    }

    /// First segment, looked up on the record itself
    pub fn head(&self) -> Option<&str> {
        self.segments.first().map(String::as_str)
    }

    /// Remaining segments, resolved inside nested values
    pub fn tail(&self) -> &[String] {
        self.segments.get(1..).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl From<&str> for FieldPath {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

impl From<String> for FieldPath {
    fn from(path: String) -> Self {
        Self::parse(&path)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

/// Read-only field access used by filtering and sorting
pub trait Record {
    /// Top-level field by name
    fn field(&self, name: &str) -> Option<&Value>;

    /// Resolve a possibly nested path
    ///
    /// Object segments are looked up by key, array segments by index.
    fn resolve(&self, path: &FieldPath) -> Option<&Value> {
        let mut current = self.field(path.head()?)?;
        for segment in path.tail() {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }
}

impl Record for Value {
    fn field(&self, name: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(name))
    }
}

impl Record for Map<String, Value> {
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl Record for HashMap<String, Value> {
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl Record for IndexMap<String, Value> {
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn field(&self, name: &str) -> Option<&Value> {
        (**self).field(name)
    }
}

impl<R: Record + ?Sized> Record for Box<R> {
    fn field(&self, name: &str) -> Option<&Value> {
        (**self).field(name)
    }
}

/// A typed entity paired with its JSON projection
///
/// Screens keep their entities typed but hand `Row`s to the table engine,
/// so the projection is computed once per refresh instead of per render.
#[derive(Debug, Clone)]
pub struct Row<T> {
    entity: T,
    fields: Value,
}

impl<T: Serialize> Row<T> {
    pub fn new(entity: T) -> serde_json::Result<Self> {
        let fields = serde_json::to_value(&entity)?;
        Ok(Self { entity, fields })
    }
}

impl<T> Row<T> {
    pub fn entity(&self) -> &T {
        &self.entity
    }

    pub fn into_entity(self) -> T {
        self.entity
    }

    pub fn fields(&self) -> &Value {
        &self.fields
    }
}

impl<T> Record for Row<T> {
    fn field(&self, name: &str) -> Option<&Value> {
        self.fields.field(name)
    }
}
