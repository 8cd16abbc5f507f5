use data_object::utils::logging::init_test_logger;
use data_object::{DataObject, Record, Value};
use serde_json::json;

/// A line item of an order
#[derive(Debug, Clone, DataObject)]
#[data_object(accessor = "sku", accessor = "quantity")]
pub struct LineItem(Record);

#[derive(Debug, Clone, DataObject)]
#[data_object(accessor = "name")]
pub struct Customer(Record);

/// An order with a nested customer, line items, tags and a derived total
#[derive(Debug, Clone, DataObject)]
#[data_object(name = "Order")]
#[data_object(field(name = "customer", ty = "Customer"))]
#[data_object(list(name = "items", ty = "LineItem"), list(name = "tags"))]
#[data_object(init(field = "total"))]
#[data_object(accessor = "status")]
pub struct Order(Record);

impl Order {
    fn init_total(&mut self) {
        let total: i64 = self
            .items()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| item.as_record()?.get("quantity")?.as_i64())
                    .sum()
            })
            .unwrap_or_default();
        self.set("total", total);
    }
}

/// A person whose full name is derived from two raw fields
#[derive(Debug, Clone, DataObject)]
#[data_object(init(field = "first_name", method = "derive_full_name"))]
#[data_object(accessor = "full_name")]
pub struct Person(Record);

impl Person {
    fn derive_full_name(&mut self) {
        let first = self.get("firstName").map(ToString::to_string).unwrap_or_default();
        let last = self.get("lastName").map(ToString::to_string).unwrap_or_default();
        self.set("full_name", format!("{first} {last}").trim().to_string());
    }
}

/// A typical order payload
#[must_use]
pub fn order_json() -> serde_json::Value {
    init_test_logger();
    json!({
        "id": 42,
        "status": "paid",
        "total": 0,
        "customer": {"name": "Al", "address": {"city": "Oslo"}},
        "items": [
            {"sku": "A-1", "quantity": 2},
            {"sku": "B-7", "quantity": 3}
        ],
        "tags": ["x", "y"],
        "meta": {"source": "web"}
    })
}

/// Shorthand for a string value
#[must_use]
pub fn s(value: &str) -> Value {
    Value::from(value)
}
