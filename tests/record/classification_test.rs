use data_object::{DataObject, FieldKind, Value};

use crate::utils::{Order, order_json};

#[test]
fn test_declared_list_of_records_is_list_and_object() {
    let order = Order::from_value(order_json()).unwrap();
    assert!(order.is_list("items"));
    assert!(order.is_object("items"));
    assert_eq!(order.kind_of("items"), Some(FieldKind::Object));

    assert!(order.is_list("tags"));
    assert!(!order.is_object("tags"));
    assert_eq!(order.kind_of("tags"), Some(FieldKind::List));
}

#[test]
fn test_bulk_classification() {
    let order = Order::from_value(order_json()).unwrap();

    assert_eq!(order.primitive_names(), vec!["id", "status", "total"]);
    assert_eq!(order.list_names(), vec!["items", "tags"]);
    assert_eq!(order.object_names(), vec!["customer", "items", "meta"]);

    let objects = order.object_fields();
    assert!(matches!(objects[0], ("customer", Value::Object(_))));
    assert!(matches!(objects[2], ("meta", Value::Dynamic(_))));
}

#[test]
fn test_empty_declared_list_is_not_object() {
    let mut json = order_json();
    json["items"] = serde_json::json!([]);
    let order = Order::from_value(json).unwrap();
    assert!(order.is_list("items"));
    assert!(!order.is_object("items"));
}

#[test]
fn test_reclassified_after_set() {
    let mut order = Order::from_value(order_json()).unwrap();
    order.set("customer", "anonymous");
    assert!(order.is_primitive("customer"));
    assert!(!order.object_names().contains(&"customer"));
}
