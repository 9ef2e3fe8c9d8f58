//! Request and response types for the PayPal REST API
//!
//! Requests are strongly typed so that every payload the client sends has a
//! known shape. Responses are kept as opaque [`Record`]s: PayPal's order and
//! payment resources are large and versioned, and the client only ever needs a
//! handful of fields out of them.
//!
//! # Type Categories
//!
//! ## Orders v2
//! - [`OrderRequest`] - Body of `POST /v2/checkout/orders`
//! - [`ConfirmRequest`] - Body of `POST /v2/checkout/orders/{id}/confirm-payment-source`
//! - [`ExperienceContext`] - Checkout UI behaviour (branding, locale, redirects)
//! - [`PatchOperation`] - One JSON-Patch style instruction for `PATCH /v2/checkout/orders/{id}`
//!
//! ## Payments v1
//! - [`PaymentRequest`] - Body of the legacy `POST /v1/payments/payment`
//! - [`ExecutePaymentRequest`] - Body of `POST /v1/payments/payment/{id}/execute`
//!
//! ## Responses
//! - [`AccessToken`] - OAuth2 bearer token
//! - [`Record`] - Any JSON resource returned by PayPal

pub mod order;
pub mod patch;
pub mod payment;
pub mod record;
pub mod token;

pub use order::{
    Amount, ConfirmOverrides, ConfirmRequest, ExperienceContext, ExperienceOverrides, Intent,
    LandingPage, OrderRequest, PayerName, PaymentMethodPreference, PaymentSource, PaypalSource,
    PurchaseUnit, ShippingPreference, UserAction,
};
pub use patch::{validate_patch, PatchOp, PatchOperation};
pub use payment::{
    generate_invoice_number, ExecutePaymentRequest, Item, ItemList, Payer, PaymentAmount,
    PaymentRequest, RedirectUrls, Transaction,
};
pub use record::Record;
pub use token::{AccessToken, TokenResponse};
