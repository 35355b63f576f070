//! Attribute input and normalization.

use std::fmt;

use indexmap::IndexSet;
use markup_core::{AttrValue, Attributes, Raw};

use crate::{MarkupError, Result};

/// An attribute value as supplied by the caller.
///
/// Only `None`, `Str` and `Raw` are valid attribute values. The numeric and
/// boolean variants are always rejected with `InvalidAttributeValue`,
/// including falsy ones such as `0` and `false`; use `Value::None` for a
/// valueless attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    None,
    Str(String),
    Raw(Raw),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => Ok(()),
            Value::Str(s) => f.write_str(s),
            Value::Raw(raw) => f.write_str(&raw.content),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Str(value.clone())
    }
}

impl From<Raw> for Value {
    fn from(value: Raw) -> Self {
        Value::Raw(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

macro_rules! value_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Int(i64::from(value))
                }
            }
        )*
    };
}

value_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::None, Into::into)
    }
}

/// Ordered list of named attribute values, the input to attribute
/// application.
///
/// Keys are written the way they would be as identifiers (`class_`,
/// `data_trigger`) and cleaned when applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attrs {
    entries: Vec<(String, Value)>,
}

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute value. A later value for the same key wins.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    /// Set a valueless attribute such as `disabled`
    pub fn flag(self, key: impl Into<String>) -> Self {
        self.set(key, Value::None)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Clean keys and validate values into an attribute mapping
    pub(crate) fn normalize(self, keywords: &IndexSet<String>) -> Result<Attributes> {
        let mut attributes = Attributes::with_capacity(self.entries.len());
        for (key, value) in self.entries {
            let value = clean_value(&key, value)?;
            let key = clean_key(&key, keywords)?;
            attributes.insert(key, value);
        }
        Ok(attributes)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Attrs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Normalize an attribute key.
///
/// A trailing underscore is dropped when the rest of the key is in
/// `keywords` (`class_` becomes `class`), then every underscore becomes a
/// hyphen (`data_trigger` becomes `data-trigger`).
pub fn clean_key(key: &str, keywords: &IndexSet<String>) -> Result<String> {
    let stripped = match key.strip_suffix('_') {
        Some(base) if keywords.contains(base) => base,
        _ => key,
    };
    let cleaned = stripped.replace('_', "-");

    if cleaned.is_empty() || cleaned.contains(' ') {
        tracing::debug!(key = %key, "rejecting attribute name");
        return Err(MarkupError::InvalidAttributeName(key.to_string()));
    }
    Ok(cleaned)
}

fn clean_value(key: &str, value: Value) -> Result<AttrValue> {
    match value {
        Value::None => Ok(AttrValue::Absent),
        Value::Str(s) if s.is_empty() => Ok(AttrValue::Absent),
        Value::Str(s) => Ok(AttrValue::Text(s)),
        Value::Raw(raw) => Ok(AttrValue::Raw(raw.content)),
        other => {
            tracing::debug!(key = %key, value = %other, "rejecting attribute value");
            Err(MarkupError::InvalidAttributeValue {
                key: key.to_string(),
                value: other.to_string(),
            })
        }
    }
}
