//! Hydration: turning decoded JSON into records.
//!
//! For every field of an input object:
//!
//! 1. a field with a declared record type hydrates its object into one
//!    record of that type;
//! 2. a declared list field keeps primitive elements as they are, or
//!    hydrates every element into a record of the element type;
//! 3. anything else nested becomes untyped data: objects turn into dynamic
//!    records, arrays are walked element by element.
//!
//! Init hooks run once the whole record is built, in declaration order, each
//! at most once and only when some input key names its field.
//! Hydration is all-or-nothing: the first error aborts it.

mod path;

use log::{debug, trace};
use serde_json::Map;

use crate::config::HydrationConfig;
use crate::error::{DataObjectError, Result};
use crate::record::{Fields, Record};
use crate::schema::naming::hook_name;
use crate::schema::{ElementType, InitHook, Schema};
use crate::utils::logging::log_fallback;
use crate::value::Value;

pub use path::{JsonPath, Segment};

/// Builds records from decoded JSON according to their schemas
#[derive(Debug, Clone, Default)]
pub struct Hydrator {
    config: HydrationConfig,
}

impl Hydrator {
    #[must_use]
    pub const fn new(config: HydrationConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &HydrationConfig {
        &self.config
    }

    /// Hydrate a record of type `schema`.
    ///
    /// Fails with `InvalidInput` unless `value` is a JSON object.
    pub fn hydrate(&self, schema: &'static Schema, value: serde_json::Value) -> Result<Record> {
        let mut path = JsonPath::root();
        match value {
            serde_json::Value::Object(map) => self.record(schema, map, &mut path),
            other => Err(unexpected(&path, "an object", &other)),
        }
    }

    /// Hydrate a record of type `schema` from an already unwrapped object
    pub fn hydrate_map(
        &self,
        schema: &'static Schema,
        map: Map<String, serde_json::Value>,
    ) -> Result<Record> {
        self.record(schema, map, &mut JsonPath::root())
    }

    /// Hydrate any JSON value without declarations
    pub fn hydrate_untyped(&self, value: serde_json::Value) -> Result<Value> {
        self.untyped(value, &mut JsonPath::root())
    }

    fn record(
        &self,
        schema: &'static Schema,
        map: Map<String, serde_json::Value>,
        path: &mut JsonPath,
    ) -> Result<Record> {
        self.check_depth(path)?;

        let hooks = schema.triggered_hooks(map.keys().map(String::as_str));

        let mut fields = Fields::with_capacity(map.len());
        for (key, value) in map {
            path.push(Segment::Key(key.clone()));
            let value = self.field(schema, &key, value, path)?;
            path.pop();
            fields.insert(key, value);
        }

        let mut record = Record::from_parts(schema, fields);
        run_init_hooks(&mut record, &hooks);
        Ok(record)
    }

    fn field(
        &self,
        schema: &'static Schema,
        key: &str,
        value: serde_json::Value,
        path: &mut JsonPath,
    ) -> Result<Value> {
        if !(value.is_object() || value.is_array()) {
            return Ok(Value::from(value));
        }

        if let Some(target) = schema.field_type(key) {
            return match value {
                serde_json::Value::Object(map) => {
                    debug!("Hydrating {path} as {}", target.name);
                    self.record(target, map, path).map(Value::Object)
                }
                other => self.mismatch(path, "an object", other),
            };
        }

        if let Some(element) = schema.list_field(key) {
            return match value {
                serde_json::Value::Array(items) => self.list(element, items, path),
                other => self.mismatch(path, "a list", other),
            };
        }

        self.untyped(value, path)
    }

    fn list(
        &self,
        element: ElementType,
        items: Vec<serde_json::Value>,
        path: &mut JsonPath,
    ) -> Result<Value> {
        let target = match element {
            ElementType::Primitive => return self.untyped_list(items, path),
            ElementType::Object(schema) => schema(),
        };
        debug!("Hydrating {} element(s) of {path} as {}", items.len(), target.name);

        let mut list = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            path.push(Segment::Index(index));
            let value = match item {
                serde_json::Value::Object(map) => self.record(target, map, path).map(Value::Object),
                other => self.mismatch(path, "an object", other),
            }?;
            path.pop();
            list.push(value);
        }
        Ok(Value::List(list))
    }

    fn untyped(&self, value: serde_json::Value, path: &mut JsonPath) -> Result<Value> {
        match value {
            serde_json::Value::Object(map) => self
                .record(Schema::dynamic(), map, path)
                .map(Value::Dynamic),
            serde_json::Value::Array(items) => self.untyped_list(items, path),
            scalar => Ok(Value::from(scalar)),
        }
    }

    fn untyped_list(&self, items: Vec<serde_json::Value>, path: &mut JsonPath) -> Result<Value> {
        self.check_depth(path)?;
        let mut list = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            path.push(Segment::Index(index));
            list.push(self.untyped(item, path)?);
            path.pop();
        }
        Ok(Value::List(list))
    }

    /// A declared field holds the wrong shape: fail, or keep it untyped
    fn mismatch(
        &self,
        path: &mut JsonPath,
        expected: &str,
        value: serde_json::Value,
    ) -> Result<Value> {
        if self.config.strict_shapes {
            return Err(unexpected(path, expected, &value));
        }
        if self.config.log_fallbacks {
            log_fallback(&*path, expected, json_type(&value));
        }
        self.untyped(value, path)
    }

    fn check_depth(&self, path: &JsonPath) -> Result<()> {
        if path.depth() > self.config.max_depth {
            return Err(DataObjectError::invalid_input(
                path.to_string(),
                format!("nesting deeper than {} levels", self.config.max_depth),
            ));
        }
        Ok(())
    }
}

fn run_init_hooks(record: &mut Record, hooks: &[&InitHook]) {
    for hook in hooks {
        trace!("Running init{} on {}", hook_name(hook.field), record.type_name());
        (hook.run)(record);
    }
}

fn unexpected(path: &JsonPath, expected: &str, found: &serde_json::Value) -> DataObjectError {
    DataObjectError::invalid_input(
        path.to_string(),
        format!("expected {expected}, found {}", json_type(found)),
    )
}

const fn json_type(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a bool",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "a list",
        serde_json::Value::Object(_) => "an object",
    }
}
