//! Structured key-value fields attached to a single log call
//!
//! The JSON formatter merges these fields into its output object; the text
//! formatter appends them as `key=value` pairs.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// A single field value
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl FieldValue {
    /// JSON rendering; NaN and infinities become `null`
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::Value;
        match self {
            FieldValue::Text(s) => Value::from(s.as_str()),
            FieldValue::Integer(n) => Value::from(*n),
            FieldValue::Float(x) => Value::from(*x),
            FieldValue::Bool(b) => Value::from(*b),
            FieldValue::Null => Value::Null,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Integer(n) => fmt::Display::fmt(n, f),
            FieldValue::Float(x) => fmt::Display::fmt(x, f),
            FieldValue::Bool(b) => fmt::Display::fmt(b, f),
            FieldValue::Null => f.write_str("null"),
        }
    }
}

macro_rules! impl_field_value_from {
    ($variant:ident <= $($ty:ty),+) => {
        $(
            impl From<$ty> for FieldValue {
                fn from(value: $ty) -> Self {
                    FieldValue::$variant(value.into())
                }
            }
        )+
    };
}

impl_field_value_from!(Text <= String, &str, Box<str>);
impl_field_value_from!(Integer <= i8, i16, i32, i64, u8, u16, u32);
impl_field_value_from!(Float <= f32, f64);
impl_field_value_from!(Bool <= bool);

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

/// Ordered set of structured fields.
///
/// Keys keep their first-insertion position; re-adding a key replaces its
/// value in place. Serializes as a JSON object in that order.
#[derive(Debug, Default, PartialEq)]
pub struct LogContext {
    fields: Vec<(String, FieldValue)>,
}

impl LogContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`add_field`](LogContext::add_field)
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.add_field(key, value);
        self
    }

    pub fn add_field(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.get_mut(&key) {
            *slot = value;
        } else {
            self.fields.push((key, value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut FieldValue> {
        self.fields
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Drop every field, keeping the allocation
    pub fn clear(&mut self) {
        self.fields.clear();
    }
}

impl Clone for LogContext {
    fn clone(&self) -> Self {
        Self {
            fields: self.fields.clone(),
        }
    }

    // Pooled entries copy a caller's context on every call.
    fn clone_from(&mut self, source: &Self) {
        self.fields.clone_from(&source.fields);
    }
}

impl Serialize for LogContext {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<K, V> FromIterator<(K, V)> for LogContext
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut context = LogContext::new();
        for (key, value) in iter {
            context.add_field(key, value);
        }
        context
    }
}

impl fmt::Display for LogContext {
    /// `key=value` pairs separated by single spaces
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, value) in &self.fields {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            write!(f, "{}={}", key, value)?;
        }
        Ok(())
    }
}
