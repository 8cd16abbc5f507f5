use data_object::codec::{from_json_slice, from_json_str, to_json_string, to_json_string_pretty};
use data_object::{DataObjectError, Record};

use crate::utils::{Order, order_json};

#[test]
fn test_decode_typed_object() {
    let text = order_json().to_string();
    let order: Order = from_json_str(&text).unwrap();
    assert_eq!(order.customer().unwrap().type_name(), "Customer");
    assert_eq!(order.get("total").unwrap(), &5);
}

#[test]
fn test_malformed_text() {
    let err = from_json_str::<Order>(r#"{"items": [}"#).unwrap_err();
    assert!(matches!(err, DataObjectError::Decode(_)));

    let err = from_json_slice::<Record>(b"\"just a string\"").unwrap_err();
    assert!(matches!(err, DataObjectError::InvalidInput { .. }));
}

#[test]
fn test_encode_round_trip() {
    let text = r#"{"id":1,"user":{"name":"Al","tags":["a","b"]},"score":2.5,"none":null}"#;
    let record = Record::from_json_str(text).unwrap();
    assert_eq!(to_json_string(&record).unwrap(), text);

    let pretty = to_json_string_pretty(&record).unwrap();
    let reparsed = Record::from_json_str(&pretty).unwrap();
    assert_eq!(reparsed, record);
}

#[test]
fn test_large_integers_survive() {
    let text = r#"{"big":18446744073709551615,"neg":-9223372036854775808}"#;
    let record = Record::from_json_str(text).unwrap();
    assert_eq!(record.get("big").unwrap().as_u64(), Some(u64::MAX));
    assert_eq!(to_json_string(&record).unwrap(), text);
}
