use data_object::{DataObjectError, HydrationConfig, Hydrator, Record, Schema, Value};
use serde_json::json;

use crate::utils::{order_json, s};

#[test]
fn test_untyped_scenario() {
    let record = Record::from_value(json!({"user": {"name": "Al"}, "tags": ["x", "y"]})).unwrap();

    let user = record.get("user").unwrap();
    assert!(matches!(user, Value::Dynamic(_)));
    assert_eq!(user.as_record().unwrap().get("name").unwrap(), &"Al");

    assert_eq!(record.get("tags").unwrap(), &Value::from(vec!["x", "y"]));
    assert!(!record.is_primitive("tags"));
    assert!(record.is_list("tags"));
}

#[test]
fn test_untyped_round_trip_is_lossless() {
    let input = order_json();
    let record = Record::from_value(input.clone()).unwrap();
    assert_eq!(record.to_value(), input);

    let again = Record::from_value(record.to_value()).unwrap();
    assert_eq!(again, record);
}

#[test]
fn test_primitive_input_serializes_unchanged() {
    let input = json!({"a": 1, "b": "two", "c": 3.5, "d": false, "e": null});
    let record = Record::from_value(input.clone()).unwrap();
    assert_eq!(record.to_value(), input);
}

#[test]
fn test_non_object_input_is_rejected() {
    let err = Record::from_value(json!(["not", "a", "map"])).unwrap_err();
    assert!(matches!(err, DataObjectError::InvalidInput { .. }));
}

#[test]
fn test_nested_lists_of_objects_stay_lists() {
    let record = Record::from_value(json!({"grid": [[{"x": 1}], []]})).unwrap();
    let grid = record.get("grid").and_then(Value::as_list).unwrap();
    let row = grid[0].as_list().unwrap();
    assert!(matches!(row[0], Value::Dynamic(_)));
    assert!(grid[1].as_list().unwrap().is_empty());
}

#[test]
fn test_set_does_not_hydrate() {
    let mut record = Record::new();
    record.set("raw", Value::List(vec![s("a")]));
    record.set("nested", Record::from_value(json!({"k": 1})).unwrap());
    assert!(record.is_object("nested"));
    assert_eq!(record.to_value(), json!({"raw": ["a"], "nested": {"k": 1}}));
}

#[test]
fn test_depth_limit_applies_to_generic_records() {
    let hydrator = Hydrator::new(HydrationConfig::default().with_max_depth(1));
    let err = hydrator
        .hydrate(Schema::dynamic(), json!({"a": [[1]]}))
        .unwrap_err();
    assert!(err.to_string().contains("$.a[0]"));
}
