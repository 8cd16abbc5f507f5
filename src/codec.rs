//! JSON text encoding and decoding of data objects.

use std::io::Read;

use crate::error::Result;
use crate::object::DataObject;

/// Decode JSON text into a data object.
///
/// Malformed text fails with `Decode`; well-formed text that is not an
/// object fails with `InvalidInput`.
pub fn from_json_str<T: DataObject>(text: &str) -> Result<T> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    T::from_value(value)
}

/// Decode JSON bytes into a data object
pub fn from_json_slice<T: DataObject>(bytes: &[u8]) -> Result<T> {
    let value: serde_json::Value = serde_json::from_slice(bytes)?;
    T::from_value(value)
}

/// Read and decode JSON from `reader`
pub fn from_reader<T: DataObject, R: Read>(mut reader: R) -> Result<T> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    from_json_str(&text)
}

/// Encode a data object as compact JSON
pub fn to_json_string<T: DataObject>(object: &T) -> Result<String> {
    Ok(serde_json::to_string(object.as_record())?)
}

/// Encode a data object as indented JSON
pub fn to_json_string_pretty<T: DataObject>(object: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(object.as_record())?)
}
