//! Field classification: primitive, list or object.
//!
//! Computed from current field values on every call, so it reflects fields
//! changed through [`Record::set`].

use itertools::{Either, Itertools};
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::record::Record;
use crate::value::Value;

/// Classification of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Null,
    Primitive,
    List,
    /// A record, or a declared list whose first element is a record
    Object,
}

impl Record {
    fn key_is_primitive(&self, key: &str) -> bool {
        self.field(key).is_some_and(Value::is_primitive)
    }

    fn key_is_list(&self, key: &str) -> bool {
        self.field(key).is_some_and(Value::is_list)
    }

    fn key_is_object(&self, key: &str) -> bool {
        match self.field(key) {
            Some(Value::Object(_) | Value::Dynamic(_)) => true,
            Some(Value::List(items)) => {
                self.schema().list_field(key).is_some()
                    && items.first().is_some_and(Value::is_record)
            }
            _ => false,
        }
    }

    fn key_kind(&self, key: &str) -> Option<FieldKind> {
        let value = self.field(key)?;
        Some(if self.key_is_object(key) {
            FieldKind::Object
        } else if value.is_list() {
            FieldKind::List
        } else if value.is_primitive() {
            FieldKind::Primitive
        } else {
            FieldKind::Null
        })
    }

    /// Whether the field holds an integer, float, string or bool
    #[must_use]
    pub fn is_primitive(&self, name: &str) -> bool {
        self.key_is_primitive(&self.resolve_name(name))
    }

    /// Whether the field holds a list
    #[must_use]
    pub fn is_list(&self, name: &str) -> bool {
        self.key_is_list(&self.resolve_name(name))
    }

    /// Whether the field holds a record, or is a declared list field whose
    /// first element is a record
    #[must_use]
    pub fn is_object(&self, name: &str) -> bool {
        self.key_is_object(&self.resolve_name(name))
    }

    /// Classify a single field; `None` when unknown
    #[must_use]
    pub fn kind_of(&self, name: &str) -> Option<FieldKind> {
        self.key_kind(&self.resolve_name(name))
    }

    /// Classification of every field
    #[must_use]
    pub fn kinds(&self) -> FxHashMap<&str, FieldKind> {
        self.keys()
            .filter_map(|key| self.key_kind(key).map(|kind| (key, kind)))
            .collect()
    }

    /// Names of fields matching `predicate`, in field order
    pub fn names_where<F>(&self, predicate: F) -> Vec<&str>
    where
        F: Fn(&Self, &str) -> bool,
    {
        self.keys().filter(|key| predicate(self, key)).collect()
    }

    /// Fields matching `predicate`, in field order
    pub fn fields_where<F>(&self, predicate: F) -> Vec<(&str, &Value)>
    where
        F: Fn(&Self, &str) -> bool,
    {
        self.iter()
            .filter(|(key, _)| predicate(self, key))
            .map(|(key, value)| (key.as_str(), value))
            .collect()
    }

    #[must_use]
    pub fn primitive_names(&self) -> Vec<&str> {
        self.names_where(Self::key_is_primitive)
    }

    #[must_use]
    pub fn primitive_fields(&self) -> Vec<(&str, &Value)> {
        self.fields_where(Self::key_is_primitive)
    }

    #[must_use]
    pub fn list_names(&self) -> Vec<&str> {
        self.names_where(Self::key_is_list)
    }

    #[must_use]
    pub fn list_fields(&self) -> Vec<(&str, &Value)> {
        self.fields_where(Self::key_is_list)
    }

    #[must_use]
    pub fn object_names(&self) -> Vec<&str> {
        self.names_where(Self::key_is_object)
    }

    #[must_use]
    pub fn object_fields(&self) -> Vec<(&str, &Value)> {
        self.fields_where(Self::key_is_object)
    }

    /// Split fields into `(objects, everything else)`
    #[must_use]
    pub fn partition_objects(&self) -> (Vec<(&str, &Value)>, Vec<(&str, &Value)>) {
        self.iter().partition_map(|(key, value)| {
            if self.key_is_object(key) {
                Either::Left((key.as_str(), value))
            } else {
                Either::Right((key.as_str(), value))
            }
        })
    }
}
