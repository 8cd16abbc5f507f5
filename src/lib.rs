//! Dynamic data objects for loosely structured data such as decoded JSON.
//!
//! Nested objects are hydrated into records according to a static schema,
//! fields are read by camelCase or snake_case name, classified as primitive,
//! list or object, and serialized back to plain JSON.

extern crate self as data_object;

pub mod codec;
pub mod config;
pub mod error;
pub mod hydrate;
pub mod object;
pub mod record;
pub mod schema;
pub mod utils;
pub mod value;

// Re-export the most common types for easier use
pub use config::HydrationConfig;
pub use error::{DataObjectError, Result};
pub use hydrate::Hydrator;
pub use object::DataObject;
pub use record::Record;
pub use record::accessor::{Access, Accessor};
pub use record::classify::FieldKind;
pub use schema::{ElementType, FieldType, InitHook, ListField, Schema, SchemaRef};
pub use value::{PrimitiveKind, Value};

// Derive macro
pub use macros::DataObject;
