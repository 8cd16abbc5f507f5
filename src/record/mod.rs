//! Records: field maps with reconciled property access.
//!
//! A [`Record`] owns its fields and remembers the [`Schema`] it was hydrated
//! with. Reads through [`Record::get`] and [`Record::has`] accept a field
//! name in either camelCase or snake_case, whichever way the input was keyed.

pub mod accessor;
pub mod classify;

use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{DataObjectError, Result};
use crate::hydrate::Hydrator;
use crate::schema::Schema;
use crate::schema::naming::NameCandidates;
use crate::value::Value;

/// Ordered field storage of a record
pub type Fields = IndexMap<String, Value>;

/// A hydrated data object
#[derive(Clone)]
pub struct Record {
    schema: &'static Schema,
    fields: Fields,
}

impl Record {
    /// An empty generic record
    #[must_use]
    pub fn new() -> Self {
        Self::with_schema(Schema::dynamic())
    }

    /// An empty record of the given type. No hydration or hooks run.
    #[must_use]
    pub fn with_schema(schema: &'static Schema) -> Self {
        Self {
            schema,
            fields: Fields::new(),
        }
    }

    pub(crate) fn from_parts(schema: &'static Schema, fields: Fields) -> Self {
        Self { schema, fields }
    }

    /// Hydrate a generic record from decoded JSON.
    ///
    /// Fails with `InvalidInput` unless `value` is a JSON object.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Hydrator::default().hydrate(Schema::dynamic(), value)
    }

    /// Hydrate a record of type `schema` from decoded JSON
    pub fn hydrate(schema: &'static Schema, value: serde_json::Value) -> Result<Self> {
        Hydrator::default().hydrate(schema, value)
    }

    /// Decode JSON text into a generic record
    pub fn from_json_str(text: &str) -> Result<Self> {
        crate::codec::from_json_str(text)
    }

    /// The schema this record was built with
    #[must_use]
    pub const fn schema(&self) -> &'static Schema {
        self.schema
    }

    /// Name of the record type
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.schema.name
    }

    /// Resolve a requested name to the key it is stored under.
    ///
    /// The camelCase spelling wins over the snake_case one; an exact key is
    /// tried last. Unknown names come back with a lowercase first letter.
    #[must_use]
    pub fn resolve_name(&self, name: &str) -> String {
        let NameCandidates {
            normalized,
            camel,
            snake,
        } = NameCandidates::new(name);
        if self.fields.contains_key(&camel) {
            camel
        } else if self.fields.contains_key(&snake) {
            snake
        } else if self.fields.contains_key(name) {
            name.to_string()
        } else {
            normalized
        }
    }

    /// Read a field by reconciled name. Unknown names read as `None`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(&self.resolve_name(name))
    }

    /// Mutable access to a field by reconciled name
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        let key = self.resolve_name(name);
        self.fields.get_mut(&key)
    }

    /// Read a field by its exact key
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Read a field only when it is present and truthy
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.get(name).filter(|value| value.is_truthy())
    }

    /// Insert or overwrite a field under its exact key.
    ///
    /// The value is stored as given: no hydration, no init hooks.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(key.into(), value.into())
    }

    /// Alias of [`Record::set`]
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.set(key, value);
    }

    /// Whether `name` resolves to a field holding a truthy value.
    ///
    /// Fields set to `""`, `0`, `false`, null or an empty list read as absent.
    /// Use [`Record::contains_key`] for strict key presence.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some_and(Value::is_truthy)
    }

    /// Same as [`Record::has`]; reads better for flags (`is("active")`)
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.has(name)
    }

    /// Whether `key` is stored, whatever its value
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over fields in insertion order
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.fields.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// All fields
    #[must_use]
    pub const fn fields(&self) -> &Fields {
        &self.fields
    }

    #[must_use]
    pub fn into_fields(self) -> Fields {
        self.fields
    }

    /// Whether an `error` or `errors` field is set
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.has("error") || self.has("errors")
    }

    /// The `error` field if set, otherwise the `errors` field.
    ///
    /// "Set" is the loose test of [`Record::has`], so this fails with
    /// `MissingField` exactly when [`Record::has_errors`] is false.
    pub fn error(&self) -> Result<&Value> {
        ["error", "errors"]
            .into_iter()
            .find_map(|name| self.property(name))
            .ok_or_else(|| DataObjectError::missing_field("error"))
    }

    /// Convert to a plain JSON object; nested records are converted too
    #[must_use]
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.fields
                .iter()
                .map(|(key, value)| (key.clone(), value.to_json()))
                .collect(),
        )
    }
}

impl Default for Record {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.schema, other.schema) && self.fields == other.fields
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.schema.name)?;
        f.debug_map().entries(self.fields.iter()).finish()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_parts(
            Schema::dynamic(),
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Deserializes as a generic record.
impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(de::Error::custom)
    }
}
