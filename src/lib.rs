//! # PayPal REST client
//!
//! A thin, typed, async wrapper around the PayPal REST checkout APIs.
//!
//! ## Features
//!
//! - **OAuth2 client credentials**: a fresh bearer token is fetched for every call
//! - **Orders v2**: create, capture, show, update (JSON-Patch) and confirm
//! - **Payments v1**: legacy create / execute payment flow
//! - **Settings with defaults**: environment-sourced, always fully populated,
//!   overridable with a typed struct
//! - **Typed errors**: every failure is a [`PaypalError`]; nothing is reported
//!   through `None` or an unchecked response body
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rust_paypal::{ExperienceOverrides, Intent, PaypalClient, Settings};
//! use rust_decimal::Decimal;
//! use std::str::FromStr;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads PAYPAL_* variables, falling back to sandbox defaults
//!     let settings = Settings::load();
//!     let client = PaypalClient::new(settings)?;
//!
//!     let order = client
//!         .create_order(
//!             Decimal::from_str("100.0")?,
//!             None,
//!             Intent::Capture,
//!             &ExperienceOverrides::new().with_brand_name("Acme"),
//!         )
//!         .await?;
//!
//!     println!("Order {:?} is {:?}", order.id(), order.status());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - **`settings`**: configuration keys, defaults and overrides
//! - **`client`**: the [`PaypalClient`] and its operations
//! - **`types`**: request payloads, tokens and response records
//! - **`error`**: error taxonomy

pub mod client;
pub mod error;
pub mod settings;
pub mod types;

// Re-exports for convenience
pub use client::{PaypalClient, PaypalClientBuilder};
pub use error::{Operation, PaypalError, Result};
pub use settings::{Mode, SettingKey, Settings, SettingsOverride};
pub use types::*;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_version_constant() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_reexports_build_an_order() {
        let settings = Settings::default();
        let request = OrderRequest::new(
            &settings,
            Decimal::new(1000, 1),
            None,
            Intent::default(),
            &ExperienceOverrides::default(),
        )
        .unwrap();

        assert_eq!(request.intent, Intent::Capture);
        assert_eq!(request.purchase_units[0].amount.value, "100.0");
        assert_eq!(request.purchase_units[0].amount.currency_code, "EUR");
    }
}
