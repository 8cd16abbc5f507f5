//! The `DataObject` trait shared by generic records and declared types.

use crate::config::HydrationConfig;
use crate::error::Result;
use crate::hydrate::Hydrator;
use crate::record::Record;
use crate::schema::Schema;

/// A record type with a static [`Schema`].
///
/// Usually derived on a newtype around [`Record`]:
///
/// ```rust
/// use data_object::{DataObject, Record};
///
/// #[derive(DataObject)]
/// #[data_object(list(name = "tags"))]
/// struct Post(Record);
///
/// let post = Post::from_json_str(r#"{"title": "Hi", "tags": ["a"]}"#).unwrap();
/// assert!(post.has("title"));
/// assert!(post.is_list("tags"));
/// ```
pub trait DataObject: Sized {
    /// The declaration records of this type are hydrated with
    fn schema() -> &'static Schema;

    /// Wrap a record already hydrated with [`DataObject::schema`]
    fn from_record(record: Record) -> Self;

    fn as_record(&self) -> &Record;

    fn as_record_mut(&mut self) -> &mut Record;

    fn into_record(self) -> Record;

    /// Hydrate from decoded JSON with the default configuration
    fn from_value(value: serde_json::Value) -> Result<Self> {
        Self::from_value_with(value, &HydrationConfig::default())
    }

    /// Hydrate from decoded JSON
    fn from_value_with(value: serde_json::Value, config: &HydrationConfig) -> Result<Self> {
        Hydrator::new(config.clone())
            .hydrate(Self::schema(), value)
            .map(Self::from_record)
    }

    /// Decode JSON text and hydrate it
    fn from_json_str(text: &str) -> Result<Self> {
        crate::codec::from_json_str(text)
    }

    /// Convert back to a plain JSON value
    fn to_value(&self) -> serde_json::Value {
        self.as_record().to_value()
    }
}

impl DataObject for Record {
    fn schema() -> &'static Schema {
        Schema::dynamic()
    }

    fn from_record(record: Record) -> Self {
        record
    }

    fn as_record(&self) -> &Record {
        self
    }

    fn as_record_mut(&mut self) -> &mut Record {
        self
    }

    fn into_record(self) -> Record {
        self
    }
}
