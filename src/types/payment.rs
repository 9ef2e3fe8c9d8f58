//! Legacy Payments v1 request types
//!
//! The v1 flow sells a number of credits: one item line priced at 1 per
//! credit, with the quantity equal to the payment value. Amount and quantity
//! therefore always coincide.

use crate::settings::Settings;
use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};

const ITEM_NAME: &str = "Credits";
const ITEM_SKU: &str = "credits";
const UNIT_PRICE: &str = "1.00";

/// Upper bound (exclusive) of the random offset added to invoice numbers
pub const INVOICE_JITTER: i64 = 1000;

/// Synthesize an invoice number from the wall clock
///
/// Epoch milliseconds plus a small random offset. Collisions are unlikely but
/// possible; PayPal rejects a duplicate invoice number with a 4xx.
pub fn generate_invoice_number() -> String {
    let millis = Utc::now().timestamp_millis();
    let offset = rand::thread_rng().gen_range(0..INVOICE_JITTER);
    (millis + offset).to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payer {
    pub payment_method: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentAmount {
    pub total: String,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub sku: String,
    pub price: String,
    pub currency: String,
    pub quantity: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemList {
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub amount: PaymentAmount,
    pub description: String,
    pub invoice_number: String,
    pub item_list: ItemList,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectUrls {
    pub return_url: String,
    pub cancel_url: String,
}

/// Body of `POST /v1/payments/payment`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub intent: String,
    pub payer: Payer,
    pub transactions: Vec<Transaction>,
    pub redirect_urls: RedirectUrls,
}

impl PaymentRequest {
    /// Build a sale of `payment_value` credits in the configured currency
    pub fn new(settings: &Settings, payment_value: u32, description: impl Into<String>) -> Self {
        Self::with_invoice_number(settings, payment_value, description, generate_invoice_number())
    }

    /// Same as [`PaymentRequest::new`] with a caller-chosen invoice number
    pub fn with_invoice_number(
        settings: &Settings,
        payment_value: u32,
        description: impl Into<String>,
        invoice_number: impl Into<String>,
    ) -> Self {
        let currency = settings.currency.clone();
        Self {
            intent: "sale".to_string(),
            payer: Payer {
                payment_method: "paypal".to_string(),
            },
            transactions: vec![Transaction {
                amount: PaymentAmount {
                    total: format!("{}.00", payment_value),
                    currency: currency.clone(),
                },
                description: description.into(),
                invoice_number: invoice_number.into(),
                item_list: ItemList {
                    items: vec![Item {
                        name: ITEM_NAME.to_string(),
                        sku: ITEM_SKU.to_string(),
                        price: UNIT_PRICE.to_string(),
                        currency,
                        quantity: payment_value.to_string(),
                    }],
                },
            }],
            redirect_urls: RedirectUrls {
                return_url: settings.return_url.clone(),
                cancel_url: settings.cancel_url.clone(),
            },
        }
    }
}

/// Body of `POST /v1/payments/payment/{id}/execute`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutePaymentRequest {
    pub payer_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payment_payload_shape() {
        let request =
            PaymentRequest::with_invoice_number(&Settings::default(), 5, "5 credits", "1700000000000");

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "intent": "sale",
                "payer": {"payment_method": "paypal"},
                "transactions": [{
                    "amount": {"total": "5.00", "currency": "EUR"},
                    "description": "5 credits",
                    "invoice_number": "1700000000000",
                    "item_list": {"items": [{
                        "name": "Credits",
                        "sku": "credits",
                        "price": "1.00",
                        "currency": "EUR",
                        "quantity": "5"
                    }]}
                }],
                "redirect_urls": {
                    "return_url": "http://localhost:8000/success",
                    "cancel_url": "http://localhost:8000/cancel"
                }
            })
        );
    }

    #[test]
    fn test_invoice_number_is_time_based() {
        let before = Utc::now().timestamp_millis();
        let invoice: i64 = generate_invoice_number().parse().unwrap();
        let after = Utc::now().timestamp_millis();

        assert!(invoice >= before);
        assert!(invoice < after + INVOICE_JITTER);
    }

    #[test]
    fn test_new_generates_invoice_number() {
        let request = PaymentRequest::new(&Settings::default(), 3, "3 credits");
        let invoice = &request.transactions[0].invoice_number;
        assert!(invoice.parse::<i64>().is_ok());
        assert_eq!(request.transactions[0].item_list.items[0].quantity, "3");
    }
}
