//! Static type declarations for data objects.
//!
//! A [`Schema`] tells the hydrator which nested values become which record
//! type, which fields are lists, and which init hooks run after a record is
//! built. Schemas are `'static` and usually generated by
//! `#[derive(DataObject)]`, but can be written by hand:
//!
//! ```rust
//! use data_object::{ElementType, ListField, Schema};
//!
//! static TAGGED: Schema = Schema {
//!     name: "Tagged",
//!     field_types: &[],
//!     list_fields: &[ListField {
//!         field: "tags",
//!         element: ElementType::Primitive,
//!     }],
//!     init_hooks: &[],
//! };
//!
//! assert!(TAGGED.list_field("tags").is_some());
//! ```

pub mod naming;

use std::fmt;

use rustc_hash::FxHashSet;

use crate::record::Record;

static DYNAMIC: Schema = Schema::new("DataObject");

/// Returns the schema of a declared record type
pub type SchemaRef = fn() -> &'static Schema;

/// Maps a field to the record type its nested object hydrates into
#[derive(Clone, Copy)]
pub struct FieldType {
    /// Input key, matched exactly
    pub field: &'static str,
    /// Schema of the record type
    pub schema: SchemaRef,
}

/// Element type of a list field
#[derive(Clone, Copy)]
pub enum ElementType {
    /// Elements are kept as they are
    Primitive,
    /// Every element is an object hydrated into this record type
    Object(SchemaRef),
}

/// Declares a field whose value is a list
#[derive(Clone, Copy)]
pub struct ListField {
    /// Input key, matched exactly
    pub field: &'static str,
    /// How list elements are hydrated
    pub element: ElementType,
}

/// Post-hydration callback bound to a field name
#[derive(Clone, Copy)]
pub struct InitHook {
    /// Field name; any input key with the same camelCase spelling triggers it
    pub field: &'static str,
    /// Callback receiving the fully hydrated record
    pub run: fn(&mut Record),
}

/// Static declaration of a record type
pub struct Schema {
    /// Type name used in logs and debug output
    pub name: &'static str,
    /// Fields holding a single nested record
    pub field_types: &'static [FieldType],
    /// Fields holding a list
    pub list_fields: &'static [ListField],
    /// Hooks run after all fields are hydrated
    pub init_hooks: &'static [InitHook],
}

impl Schema {
    /// An empty schema with the given type name
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            field_types: &[],
            list_fields: &[],
            init_hooks: &[],
        }
    }

    /// The one schema of generic records: no mappings, no hooks
    #[must_use]
    pub fn dynamic() -> &'static Self {
        &DYNAMIC
    }

    /// Whether this is the generic schema. A declared type that maps
    /// nothing is still its own type.
    #[must_use]
    pub fn is_dynamic(&self) -> bool {
        std::ptr::eq(self, Self::dynamic())
    }

    /// The record type declared for `key`
    #[must_use]
    pub fn field_type(&self, key: &str) -> Option<&'static Schema> {
        self.field_types
            .iter()
            .find(|mapping| mapping.field == key)
            .map(|mapping| (mapping.schema)())
    }

    /// The element type declared for list field `key`
    #[must_use]
    pub fn list_field(&self, key: &str) -> Option<ElementType> {
        self.list_fields
            .iter()
            .find(|list| list.field == key)
            .map(|list| list.element)
    }

    /// Hooks triggered by any of `keys`, in declaration order, each once
    pub fn triggered_hooks<'k>(&self, keys: impl IntoIterator<Item = &'k str>) -> Vec<&InitHook> {
        if self.init_hooks.is_empty() {
            return Vec::new();
        }
        let wanted: FxHashSet<String> = keys.into_iter().map(naming::hook_name).collect();
        self.init_hooks
            .iter()
            .filter(|hook| wanted.contains(&naming::hook_name(hook.field)))
            .collect()
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("name", &self.name)
            .field(
                "field_types",
                &self.field_types.iter().map(|m| m.field).collect::<Vec<_>>(),
            )
            .field(
                "list_fields",
                &self.list_fields.iter().map(|l| l.field).collect::<Vec<_>>(),
            )
            .field(
                "init_hooks",
                &self.init_hooks.iter().map(|h| h.field).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl fmt::Debug for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive => f.write_str("Primitive"),
            Self::Object(schema) => write!(f, "Object({})", schema().name),
        }
    }
}
