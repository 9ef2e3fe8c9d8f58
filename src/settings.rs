//! PayPal settings resolution
//!
//! [`Settings`] is a flat set of named string values. Each value is read from an
//! environment-like source and falls back to a hard-coded default, so a
//! `Settings` is always fully populated. Misconfiguration such as leftover
//! placeholder credentials is therefore only detected when PayPal rejects a
//! request.
//!
//! ```
//! use rust_paypal::settings::{SettingKey, Settings, SettingsOverride};
//!
//! let mut settings = Settings::from_source(|_| None);
//! assert_eq!(settings.currency, "EUR");
//!
//! settings.override_with(SettingsOverride {
//!     currency: Some("USD".to_string()),
//!     ..Default::default()
//! });
//! assert_eq!(settings.get(SettingKey::Currency), "USD");
//! ```

use crate::{PaypalError, Result};
use std::env;
use std::fmt;
use url::Url;

/// Sandbox OAuth2 token endpoint
pub const DEFAULT_TOKEN_URL: &str = "https://api-m.sandbox.paypal.com/v1/oauth2/token";
/// Sandbox Orders v2 endpoint
pub const DEFAULT_ORDER_URL: &str = "https://api-m.sandbox.paypal.com/v2/checkout/orders";
/// Sandbox Payments v1 endpoint
pub const DEFAULT_PAYMENT_URL: &str = "https://api-m.sandbox.paypal.com/v1/payments/payment";

/// Every setting understood by [`Settings`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    ClientId,
    ClientSecret,
    TokenUrl,
    OrderUrl,
    PaymentUrl,
    Mode,
    Currency,
    ReturnUrl,
    CancelUrl,
    WebhookId,
    WebhookUrl,
    BrandName,
    Locale,
}

impl SettingKey {
    /// All keys, in declaration order
    pub const ALL: [SettingKey; 13] = [
        SettingKey::ClientId,
        SettingKey::ClientSecret,
        SettingKey::TokenUrl,
        SettingKey::OrderUrl,
        SettingKey::PaymentUrl,
        SettingKey::Mode,
        SettingKey::Currency,
        SettingKey::ReturnUrl,
        SettingKey::CancelUrl,
        SettingKey::WebhookId,
        SettingKey::WebhookUrl,
        SettingKey::BrandName,
        SettingKey::Locale,
    ];

    /// Name of the environment variable holding this setting
    pub fn env_var(&self) -> &'static str {
        match self {
            SettingKey::ClientId => "PAYPAL_CLIENT_ID",
            SettingKey::ClientSecret => "PAYPAL_CLIENT_SECRET",
            SettingKey::TokenUrl => "PAYPAL_TOKEN_URL",
            SettingKey::OrderUrl => "PAYPAL_ORDER_URL",
            SettingKey::PaymentUrl => "PAYPAL_PAYMENT_URL",
            SettingKey::Mode => "PAYPAL_MODE",
            SettingKey::Currency => "PAYPAL_CURRENCY",
            SettingKey::ReturnUrl => "PAYPAL_RETURN_URL",
            SettingKey::CancelUrl => "PAYPAL_CANCEL_URL",
            SettingKey::WebhookId => "PAYPAL_WEBHOOK_ID",
            SettingKey::WebhookUrl => "PAYPAL_WEBHOOK_URL",
            SettingKey::BrandName => "PAYPAL_BRAND_NAME",
            SettingKey::Locale => "PAYPAL_LOCALE",
        }
    }

    /// Value used when the source does not define this setting
    pub fn default_value(&self) -> &'static str {
        match self {
            SettingKey::ClientId => "YOUR_PAYPAL_CLIENT_ID",
            SettingKey::ClientSecret => "secret",
            SettingKey::TokenUrl => DEFAULT_TOKEN_URL,
            SettingKey::OrderUrl => DEFAULT_ORDER_URL,
            SettingKey::PaymentUrl => DEFAULT_PAYMENT_URL,
            SettingKey::Mode => "sandbox",
            SettingKey::Currency => "EUR",
            SettingKey::ReturnUrl => "http://localhost:8000/success",
            SettingKey::CancelUrl => "http://localhost:8000/cancel",
            SettingKey::WebhookId => "YOUR PAYPAL WEBHOOK ID",
            SettingKey::WebhookUrl => "http://localhost:8000/webhook",
            SettingKey::BrandName => "My Store",
            SettingKey::Locale => "en-US",
        }
    }
}

/// Target PayPal environment, as declared by the `mode` setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Sandbox,
    Live,
}

impl Mode {
    /// Parse a mode string; anything other than `live` is treated as sandbox
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("live") {
            Mode::Live
        } else {
            Mode::Sandbox
        }
    }
}

/// Resolved PayPal settings
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    pub client_id: String,
    pub client_secret: String,
    pub token_url: String,
    pub order_url: String,
    pub payment_url: String,
    /// Read and carried, not acted upon by the client
    pub mode: String,
    pub currency: String,
    pub return_url: String,
    pub cancel_url: String,
    pub webhook_id: String,
    pub webhook_url: String,
    pub brand_name: String,
    pub locale: String,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("token_url", &self.token_url)
            .field("order_url", &self.order_url)
            .field("payment_url", &self.payment_url)
            .field("mode", &self.mode)
            .field("currency", &self.currency)
            .field("return_url", &self.return_url)
            .field("cancel_url", &self.cancel_url)
            .field("webhook_id", &self.webhook_id)
            .field("webhook_url", &self.webhook_url)
            .field("brand_name", &self.brand_name)
            .field("locale", &self.locale)
            .finish()
    }
}

impl Settings {
    /// Load settings from the process environment
    pub fn load() -> Self {
        Self::from_source(|name| env::var(name).ok())
    }

    /// Load settings from an arbitrary key/value source
    ///
    /// `lookup` receives the environment variable name of each setting
    /// (e.g. `PAYPAL_CURRENCY`) and returns its value if defined.
    pub fn from_source<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read =
            |key: SettingKey| lookup(key.env_var()).unwrap_or_else(|| key.default_value().to_string());

        Self {
            client_id: read(SettingKey::ClientId),
            client_secret: read(SettingKey::ClientSecret),
            token_url: read(SettingKey::TokenUrl),
            order_url: read(SettingKey::OrderUrl),
            payment_url: read(SettingKey::PaymentUrl),
            mode: read(SettingKey::Mode),
            currency: read(SettingKey::Currency),
            return_url: read(SettingKey::ReturnUrl),
            cancel_url: read(SettingKey::CancelUrl),
            webhook_id: read(SettingKey::WebhookId),
            webhook_url: read(SettingKey::WebhookUrl),
            brand_name: read(SettingKey::BrandName),
            locale: read(SettingKey::Locale),
        }
    }

    /// Read a setting by key
    pub fn get(&self, key: SettingKey) -> &str {
        match key {
            SettingKey::ClientId => &self.client_id,
            SettingKey::ClientSecret => &self.client_secret,
            SettingKey::TokenUrl => &self.token_url,
            SettingKey::OrderUrl => &self.order_url,
            SettingKey::PaymentUrl => &self.payment_url,
            SettingKey::Mode => &self.mode,
            SettingKey::Currency => &self.currency,
            SettingKey::ReturnUrl => &self.return_url,
            SettingKey::CancelUrl => &self.cancel_url,
            SettingKey::WebhookId => &self.webhook_id,
            SettingKey::WebhookUrl => &self.webhook_url,
            SettingKey::BrandName => &self.brand_name,
            SettingKey::Locale => &self.locale,
        }
    }

    /// Write a setting by key
    pub fn set(&mut self, key: SettingKey, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        match key {
            SettingKey::ClientId => self.client_id = value,
            SettingKey::ClientSecret => self.client_secret = value,
            SettingKey::TokenUrl => self.token_url = value,
            SettingKey::OrderUrl => self.order_url = value,
            SettingKey::PaymentUrl => self.payment_url = value,
            SettingKey::Mode => self.mode = value,
            SettingKey::Currency => self.currency = value,
            SettingKey::ReturnUrl => self.return_url = value,
            SettingKey::CancelUrl => self.cancel_url = value,
            SettingKey::WebhookId => self.webhook_id = value,
            SettingKey::WebhookUrl => self.webhook_url = value,
            SettingKey::BrandName => self.brand_name = value,
            SettingKey::Locale => self.locale = value,
        }
        self
    }

    /// Merge an override onto these settings
    ///
    /// Every `Some` field replaces the current value; other settings are left
    /// untouched. Values are not validated.
    pub fn override_with(&mut self, overrides: SettingsOverride) -> &mut Self {
        for (key, value) in overrides.into_pairs() {
            self.set(key, value);
        }
        self
    }

    /// Parsed `mode` setting
    pub fn mode(&self) -> Mode {
        Mode::parse(&self.mode)
    }

    /// Check that every endpoint URL is an absolute http(s) URL
    pub fn validate(&self) -> Result<()> {
        for key in [
            SettingKey::TokenUrl,
            SettingKey::OrderUrl,
            SettingKey::PaymentUrl,
        ] {
            let value = self.get(key);
            let url = Url::parse(value).map_err(|e| {
                PaypalError::config(format!("{} is not a valid URL ({}): {}", key.env_var(), value, e))
            })?;
            if url.scheme() != "http" && url.scheme() != "https" {
                return Err(PaypalError::config(format!(
                    "{} must start with http:// or https://",
                    key.env_var()
                )));
            }
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_source(|_| None)
    }
}

/// Partial settings to merge with [`Settings::override_with`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverride {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub token_url: Option<String>,
    pub order_url: Option<String>,
    pub payment_url: Option<String>,
    pub mode: Option<String>,
    pub currency: Option<String>,
    pub return_url: Option<String>,
    pub cancel_url: Option<String>,
    pub webhook_id: Option<String>,
    pub webhook_url: Option<String>,
    pub brand_name: Option<String>,
    pub locale: Option<String>,
}

impl SettingsOverride {
    fn into_pairs(self) -> impl Iterator<Item = (SettingKey, String)> {
        [
            (SettingKey::ClientId, self.client_id),
            (SettingKey::ClientSecret, self.client_secret),
            (SettingKey::TokenUrl, self.token_url),
            (SettingKey::OrderUrl, self.order_url),
            (SettingKey::PaymentUrl, self.payment_url),
            (SettingKey::Mode, self.mode),
            (SettingKey::Currency, self.currency),
            (SettingKey::ReturnUrl, self.return_url),
            (SettingKey::CancelUrl, self.cancel_url),
            (SettingKey::WebhookId, self.webhook_id),
            (SettingKey::WebhookUrl, self.webhook_url),
            (SettingKey::BrandName, self.brand_name),
            (SettingKey::Locale, self.locale),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
    }
}
