use data_object::{Access, Accessor, DataObjectError, Record, Value};
use serde_json::json;

#[test]
fn test_snake_input_reads_both_ways() {
    let record = Record::from_value(json!({"my_field": "v"})).unwrap();
    assert_eq!(record.get("myField"), record.get("my_field"));
    assert_eq!(record.get("myField").unwrap(), &"v");
}

#[test]
fn test_camel_input_reads_both_ways() {
    let record = Record::from_value(json!({"myField": "v"})).unwrap();
    assert_eq!(record.get("myField"), record.get("my_field"));
    assert_eq!(record.get("my_field").unwrap(), &"v");
}

#[test]
fn test_loose_presence() {
    let mut record = Record::from_value(json!({"name": "Al"})).unwrap();
    assert!(record.has("name"));

    for empty in [Value::from(""), Value::from(0), Value::List(Vec::new())] {
        record.set("name", empty);
        assert!(!record.has("name"));
        assert!(record.contains_key("name"));
    }

    record.set("name", vec!["Al"]);
    assert!(record.has("name"));
}

#[test]
fn test_accessor_calls() {
    let record = Record::from_value(json!({"first_name": "Al", "active": true, "count": 0})).unwrap();

    assert_eq!(
        record.call("getFirstName"),
        Some(Access::Value(Some(&Value::from("Al"))))
    );
    assert_eq!(record.call("isActive"), Some(Access::Flag(true)));
    assert_eq!(record.call("hasCount"), Some(Access::Flag(false)));
    assert_eq!(record.call("getUnknown"), Some(Access::Value(None)));
    assert_eq!(record.call("deleteFirstName"), None);

    let accessor = Accessor::parse("hasFirstName").unwrap();
    assert_eq!(accessor.field(), "firstName");
    assert!(record.dispatch(&accessor).flag());
}

#[test]
fn test_error_field() {
    let record = Record::from_json_str(r#"{"errors": "bad token"}"#).unwrap();
    assert!(record.has_errors());
    assert_eq!(record.error().unwrap(), &"bad token");

    let record = Record::from_json_str(r#"{"error": "", "errors": "fallback"}"#).unwrap();
    assert_eq!(record.error().unwrap(), &"fallback");

    let record = Record::from_json_str(r#"{"ok": true}"#).unwrap();
    assert!(!record.has_errors());
    assert!(matches!(record.error(), Err(DataObjectError::MissingField(_))));
}

#[test]
fn test_mutation_through_get_mut() {
    let mut record = Record::from_value(json!({"user": {"name": "Al"}})).unwrap();
    let user = record.get_mut("user").and_then(Value::as_record_mut).unwrap();
    user.set("name", "Bo");
    assert_eq!(record.to_value(), json!({"user": {"name": "Bo"}}));
}
