//! Opaque JSON resource returned by PayPal

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A PayPal resource (order, capture, payment, ...) kept as raw JSON
///
/// Fields are looked up by dotted path, e.g. `payer.email_address` or
/// `purchase_units.0.amount.value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Value);

impl Record {
    /// Wrap a JSON value
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// An empty JSON object, used for body-less success responses
    pub fn empty() -> Self {
        Self(Value::Object(Map::new()))
    }

    /// Resource id
    pub fn id(&self) -> Option<&str> {
        self.get_str("id")
    }

    /// Resource status (e.g. `CREATED`, `APPROVED`, `COMPLETED`)
    pub fn status(&self) -> Option<&str> {
        self.get_str("status")
    }

    /// Look up a value by dotted path
    ///
    /// Numeric segments index into arrays.
    pub fn get(&self, path: &str) -> Option<&Value> {
        path.split('.').try_fold(&self.0, |current, segment| match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
    }

    /// Look up a string value by dotted path
    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(Value::as_str)
    }

    /// `href` of the HATEOAS link with the given `rel`
    ///
    /// Buyers are sent to the `approve` (or `payer-action`) link of an order and
    /// the `approval_url` link of a legacy payment.
    pub fn link(&self, rel: &str) -> Option<&str> {
        self.get("links")?
            .as_array()?
            .iter()
            .find(|link| link.get("rel").and_then(Value::as_str) == Some(rel))
            .and_then(|link| link.get("href"))
            .and_then(Value::as_str)
    }

    /// Whether the record has no fields
    pub fn is_empty(&self) -> bool {
        match &self.0 {
            Value::Object(map) => map.is_empty(),
            Value::Null => true,
            _ => false,
        }
    }

    /// Borrow the underlying JSON
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Take the underlying JSON
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl Default for Record {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Value> for Record {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_order() -> Record {
        Record::new(json!({
            "id": "5O190127TN364715T",
            "status": "PAYER_ACTION_REQUIRED",
            "payer": {
                "name": {"given_name": "John", "surname": "Doe"},
                "email_address": "customer@example.com"
            },
            "purchase_units": [
                {"amount": {"currency_code": "EUR", "value": "100.0"}}
            ],
            "links": [
                {"href": "https://api-m.paypal.com/v2/checkout/orders/5O190127TN364715T", "rel": "self", "method": "GET"},
                {"href": "https://www.paypal.com/checkoutnow?token=5O190127TN364715T", "rel": "payer-action", "method": "GET"}
            ]
        }))
    }

    #[test]
    fn test_record_accessors() {
        let order = sample_order();
        assert_eq!(order.id(), Some("5O190127TN364715T"));
        assert_eq!(order.status(), Some("PAYER_ACTION_REQUIRED"));
        assert_eq!(order.get_str("payer.name.surname"), Some("Doe"));
        assert_eq!(order.get_str("payer.email_address"), Some("customer@example.com"));
        assert_eq!(order.get_str("purchase_units.0.amount.value"), Some("100.0"));
        assert_eq!(order.get_str("purchase_units.1.amount.value"), None);
        assert_eq!(order.get_str("payer.phone"), None);
    }

    #[test]
    fn test_record_links() {
        let order = sample_order();
        assert_eq!(
            order.link("payer-action"),
            Some("https://www.paypal.com/checkoutnow?token=5O190127TN364715T")
        );
        assert_eq!(order.link("approve"), None);
    }

    #[test]
    fn test_empty_record() {
        assert!(Record::empty().is_empty());
        assert!(Record::new(Value::Null).is_empty());
        assert!(!sample_order().is_empty());
        assert_eq!(Record::empty().id(), None);
    }
}
