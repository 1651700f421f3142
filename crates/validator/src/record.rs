//! Submitted input under validation

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RecordError;

/// Field name to value mapping for one validation pass.
///
/// Field order is insertion order. Built from a JSON object, an
/// [`IndexMap`], or any iterator of `(name, value)` pairs:
///
/// ```
/// use serde_json::json;
/// use tollgate_validator::Record;
///
/// let record = Record::from_json(json!({ "name": "alice", "age": 30 })).unwrap();
/// assert_eq!(record.get("age"), Some(&json!(30)));
/// assert!(!record.contains("email"));
///
/// let record: Record = [("n", json!(4))].into_iter().collect();
/// assert_eq!(record.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(IndexMap<String, Value>);

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from a JSON object.
    ///
    /// # Errors
    ///
    /// [`RecordError::NotAnObject`] for any other JSON value.
    pub fn from_json(value: Value) -> Result<Self, RecordError> {
        match value {
            Value::Object(map) => Ok(map.into_iter().collect()),
            other => Err(RecordError::NotAnObject {
                found: json_type_name(&other),
            }),
        }
    }

    /// Returns the value of `field`, if present.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Returns `true` if `field` is present, even when its value is null.
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Sets `field`, returning the previous value.
    pub fn insert(&mut self, field: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(field.into(), value)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns this record with every entry of `overrides` applied on top.
    ///
    /// Existing fields keep their position; new fields are appended.
    ///
    /// ```
    /// use serde_json::json;
    /// use tollgate_validator::Record;
    ///
    /// let input: Record = [("name", json!("alice")), ("role", json!("user"))].into_iter().collect();
    /// let merged = input.merged([("role", json!("admin"))].into_iter().collect());
    /// assert_eq!(merged.get("role"), Some(&json!("admin")));
    /// assert_eq!(merged.len(), 2);
    /// ```
    #[must_use]
    pub fn merged(mut self, overrides: Self) -> Self {
        self.0.extend(overrides.0);
        self
    }

    /// Returns the underlying map.
    pub fn into_inner(self) -> IndexMap<String, Value> {
        self.0
    }
}

impl From<IndexMap<String, Value>> for Record {
    fn from(map: IndexMap<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
