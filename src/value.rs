//! The value stored in a record field.

use std::fmt;

use serde::ser::{Serialize, Serializer};
use serde_json::Number;

use crate::record::Record;

/// Primitive kinds a field value can have
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveKind {
    Integer,
    Float,
    String,
    Bool,
}

/// A field value: primitive, list or record
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    /// Integer or float, kept exactly as decoded
    Number(Number),
    String(String),
    List(Vec<Value>),
    /// A record hydrated through a declared field or list mapping
    Object(Record),
    /// A record hydrated without any declaration
    Dynamic(Record),
}

impl Value {
    /// The primitive kind, or `None` for null, lists and records
    #[must_use]
    pub fn primitive_kind(&self) -> Option<PrimitiveKind> {
        match self {
            Self::Bool(_) => Some(PrimitiveKind::Bool),
            Self::Number(n) if n.is_f64() => Some(PrimitiveKind::Float),
            Self::Number(_) => Some(PrimitiveKind::Integer),
            Self::String(_) => Some(PrimitiveKind::String),
            Self::Null | Self::List(_) | Self::Object(_) | Self::Dynamic(_) => None,
        }
    }

    #[must_use]
    pub fn is_primitive(&self) -> bool {
        self.primitive_kind().is_some()
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Whether the value is a hydrated record, typed or dynamic
    #[must_use]
    pub const fn is_record(&self) -> bool {
        matches!(self, Self::Object(_) | Self::Dynamic(_))
    }

    /// Loose truthiness: null, `false`, zero, `""`, `"0"`, an empty list
    /// and a record without fields are all falsy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            Self::String(s) => !(s.is_empty() || s == "0"),
            Self::List(items) => !items.is_empty(),
            Self::Object(record) | Self::Dynamic(record) => !record.is_empty(),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Number(n) => n.as_u64(),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list_mut(&mut self) -> Option<&mut Vec<Self>> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Object(record) | Self::Dynamic(record) => Some(record),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_record_mut(&mut self) -> Option<&mut Record> {
        match self {
            Self::Object(record) | Self::Dynamic(record) => Some(record),
            _ => None,
        }
    }

    /// Convert back to a plain JSON value, serializing nested records
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Null => serde_json::Value::Null,
            Self::Bool(b) => serde_json::Value::Bool(*b),
            Self::Number(n) => serde_json::Value::Number(n.clone()),
            Self::String(s) => serde_json::Value::String(s.clone()),
            Self::List(items) => serde_json::Value::Array(items.iter().map(Self::to_json).collect()),
            Self::Object(record) | Self::Dynamic(record) => record.to_value(),
        }
    }

    /// Name of the variant, for logs and error messages
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Object(_) => "object",
            Self::Dynamic(_) => "dynamic object",
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Number(n) => n.serialize(serializer),
            Self::String(s) => serializer.serialize_str(s),
            Self::List(items) => serializer.collect_seq(items),
            Self::Object(record) | Self::Dynamic(record) => record.serialize(serializer),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            other => write!(f, "{}", other.to_json()),
        }
    }
}

/// Untyped conversion: every nested object becomes a dynamic record.
impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => Self::Number(n),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            serde_json::Value::Object(map) => Self::Dynamic(
                map.into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Self::Number(Number::from(n))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

/// Non-finite floats become `Null`, as they have no JSON form.
impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Number::from_f64(f).map_or(Self::Null, Self::Number)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Generic records become `Dynamic`, records of a declared type `Object`.
impl From<Record> for Value {
    fn from(record: Record) -> Self {
        if record.schema().is_dynamic() {
            Self::Dynamic(record)
        } else {
            Self::Object(record)
        }
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

macro_rules! impl_eq_number {
    ($($ty:ty => $as:ident),*) => {
        $(
            impl PartialEq<$ty> for Value {
                fn eq(&self, other: &$ty) -> bool {
                    self.$as() == Some((*other).into())
                }
            }
        )*
    };
}

impl_eq_number!(i32 => as_i64, i64 => as_i64, u32 => as_u64, u64 => as_u64, f64 => as_f64);

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}
