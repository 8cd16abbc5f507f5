use data_object::{DataObject, ElementType, HydrationConfig, Record, Value};
use serde_json::json;

use crate::utils::{Customer, LineItem, Order, Person, order_json};

#[test]
fn test_schema_declaration() {
    let schema = Order::schema();
    assert_eq!(schema.name, "Order");
    assert_eq!(schema.field_type("customer").unwrap().name, "Customer");
    assert!(matches!(
        schema.list_field("items"),
        Some(ElementType::Object(_))
    ));
    assert!(matches!(
        schema.list_field("tags"),
        Some(ElementType::Primitive)
    ));
    assert_eq!(schema.init_hooks.len(), 1);
    assert_eq!(LineItem::schema().name, "LineItem");
    // declares nothing, but is still its own type
    assert!(!Customer::schema().is_dynamic());
    assert!(Customer::schema().field_types.is_empty());
}

#[test]
fn test_typed_hydration() {
    let order = Order::from_value(order_json()).unwrap();
    assert_eq!(order.type_name(), "Order");

    let customer = order.customer().unwrap();
    assert_eq!(customer.type_name(), "Customer");
    assert_eq!(customer.get("name").unwrap(), &"Al");
    // undeclared nesting inside a typed record falls back to generic records
    assert!(matches!(customer.get("address"), Some(Value::Dynamic(_))));

    let items = order.items().unwrap();
    assert_eq!(items.len(), 2);
    let skus: Vec<_> = items
        .iter()
        .map(|item| {
            let record = item.as_record().unwrap();
            assert_eq!(record.type_name(), "LineItem");
            record.get("sku").unwrap().to_string()
        })
        .collect();
    assert_eq!(skus, vec!["A-1", "B-7"]);

    assert_eq!(order.tags().unwrap(), &[Value::from("x"), Value::from("y")][..]);
    assert_eq!(order.status().unwrap(), &"paid");
    assert!(order.has_status());
    assert!(order.has_customer());
}

#[test]
fn test_init_hook_sees_hydrated_items() {
    let order = Order::from_value(order_json()).unwrap();
    assert_eq!(order.get("total").unwrap(), &5);
}

#[test]
fn test_init_hook_only_for_present_keys() {
    let mut json = order_json();
    json.as_object_mut().unwrap().remove("total");
    let order = Order::from_value(json).unwrap();
    assert!(order.get("total").is_none());
}

#[test]
fn test_init_hook_with_custom_method_and_camel_input() {
    let person = Person::from_value(json!({"firstName": "Ada", "last_name": "Lovelace"})).unwrap();
    assert_eq!(person.full_name().unwrap(), &"Ada Lovelace");
    assert!(person.has_full_name());
}

#[test]
fn test_serialization_is_inverse_of_hydration() {
    let order = Order::from_value(order_json()).unwrap();
    let mut expected = order_json();
    expected["total"] = json!(5);
    assert_eq!(order.to_value(), expected);

    let again = Order::from_value(order.to_value()).unwrap();
    assert_eq!(again.as_record(), order.as_record());
}

#[test]
fn test_strict_shapes_reject_bad_items() {
    let mut json = order_json();
    json["items"] = json!([{"sku": "A-1"}, "B-7"]);
    let err = Order::from_value(json.clone()).unwrap_err();
    assert!(err.to_string().contains("$.items[1]"));

    let order = Order::from_value_with(json, &HydrationConfig::lenient()).unwrap();
    assert_eq!(order.items().unwrap()[1], "B-7");
}

#[test]
fn test_conversions() {
    let order = Order::from_value(order_json()).unwrap();
    let value = Value::from(order.clone());
    assert!(matches!(value, Value::Object(_)));

    let record: Record = order.into();
    assert_eq!(record.type_name(), "Order");
    assert_eq!(Order::from_record(record).type_name(), "Order");
}

#[test]
fn test_from_json_str() {
    let item = LineItem::from_json_str(r#"{"sku": "Z-9", "quantity": 1}"#).unwrap();
    assert_eq!(item.sku().unwrap(), &"Z-9");
    assert_eq!(item.quantity().unwrap(), &1);
    assert!(LineItem::from_json_str("{oops").unwrap_err().is_decode());
}
