//! # Product Records
//!
//! Open-ended product records and by-name field access.
//!
//! Stockroom never owns a product schema. A record is whatever map of field
//! names to values the caller hands in, and the only thing the operations
//! ever do with it is read one field by name. The [`Fields`] trait captures
//! exactly that, so filter and sort work the same over:
//!
//! - [`Record`] (open-ended, backed by a JSON object)
//! - `serde_json::Map` / `serde_json::Value`
//! - [`Product`](crate::types::Product) (fixed schema)

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ValidationError, ValidationResult};

// =============================================================================
// Field Values
// =============================================================================

/// A borrowed view of one field of a record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Null,
    Bool(bool),
    Number(f64),
    Text(Cow<'a, str>),
    /// Arrays and nested objects.
    Composite(&'a Value),
}

impl<'a> From<&'a Value> for FieldValue<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Null => FieldValue::Null,
            Value::Bool(b) => FieldValue::Bool(*b),
            Value::Number(n) => n.as_f64().map_or(FieldValue::Null, FieldValue::Number),
            Value::String(s) => FieldValue::Text(Cow::Borrowed(s.as_str())),
            Value::Array(_) | Value::Object(_) => FieldValue::Composite(value),
        }
    }
}

// =============================================================================
// Field Access
// =============================================================================

/// Read access to a record's fields by name.
pub trait Fields {
    /// Returns the named field, or `None` when the record has no such field.
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;
}

impl Fields for Map<String, Value> {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        self.get(name).map(FieldValue::from)
    }
}

/// Only objects have fields; any other JSON value has none.
impl Fields for Value {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        self.as_object()?.field(name)
    }
}

impl<T: Fields + ?Sized> Fields for &T {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        (**self).field(name)
    }
}

// =============================================================================
// Record
// =============================================================================

/// An open-ended product record: field name to JSON value.
///
/// ## Example
/// ```rust
/// use stockroom_core::record::Record;
/// use serde_json::json;
///
/// let record = Record::new()
///     .with_field("name", "Laptop")
///     .with_field("price", 1200);
///
/// assert_eq!(record.get("price"), Some(&json!(1200)));
/// assert_eq!(record.get("stock"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Record(Map::new())
    }

    /// Returns the raw value of a field.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Sets a field, returning the previous value if there was one.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(name.into(), value.into())
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Unwraps the underlying JSON object.
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl Fields for Record {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        self.0.field(name)
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Record(map)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Object(record.0)
    }
}

/// Only JSON objects are records.
impl TryFrom<Value> for Record {
    type Error = ValidationError;

    fn try_from(value: Value) -> ValidationResult<Self> {
        match value {
            Value::Object(map) => Ok(Record(map)),
            _ => Err(ValidationError::InvalidRecord),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Record(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_values_from_json() {
        let record = Record::try_from(json!({
            "id": 1,
            "name": "Mouse",
            "price": 25.5,
            "active": true,
            "discontinued": null,
            "tags": ["usb"],
        }))
        .unwrap();

        assert_eq!(record.field("id"), Some(FieldValue::Number(1.0)));
        assert_eq!(record.field("name"), Some(FieldValue::Text("Mouse".into())));
        assert_eq!(record.field("price"), Some(FieldValue::Number(25.5)));
        assert_eq!(record.field("active"), Some(FieldValue::Bool(true)));
        assert_eq!(record.field("discontinued"), Some(FieldValue::Null));
        assert!(matches!(
            record.field("tags"),
            Some(FieldValue::Composite(_))
        ));
        assert_eq!(record.field("stock"), None);
    }

    #[test]
    fn test_non_object_values_have_no_fields() {
        assert_eq!(json!("Laptop").field("name"), None);
        assert_eq!(json!(42).field("name"), None);
        assert_eq!(Value::Null.field("name"), None);
        assert_eq!(
            json!({"name": "Laptop"}).field("name"),
            Some(FieldValue::Text("Laptop".into()))
        );
    }

    #[test]
    fn test_try_from_rejects_non_objects() {
        assert_eq!(
            Record::try_from(json!([1, 2])),
            Err(ValidationError::InvalidRecord)
        );
    }

    #[test]
    fn test_record_builders() {
        let mut record: Record = [("name", json!("Keyboard")), ("stock", json!(20))]
            .into_iter()
            .collect();
        assert_eq!(record.len(), 2);

        let previous = record.insert("stock", 19);
        assert_eq!(previous, Some(json!(20)));
        assert_eq!(
            Value::from(record),
            json!({"name": "Keyboard", "stock": 19})
        );
        assert!(Record::new().is_empty());
    }

    #[test]
    fn test_serde_is_transparent() {
        let record: Record = serde_json::from_str(r#"{"name":"Monitor","stock":0}"#).unwrap();
        assert_eq!(record.get("stock"), Some(&json!(0)));
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"name":"Monitor","stock":0}"#
        );
    }
}
