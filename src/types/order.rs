//! Orders v2 request types

use super::record::Record;
use crate::settings::Settings;
use crate::{PaypalError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether funds are captured immediately or only authorized
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    #[default]
    Capture,
    Authorize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethodPreference {
    Unrestricted,
    ImmediatePaymentRequired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LandingPage {
    Login,
    GuestCheckout,
    NoPreference,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShippingPreference {
    GetFromFile,
    NoShipping,
    SetProvidedAddress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserAction {
    Continue,
    PayNow,
}

/// Checkout UI behaviour sent with an order or a confirmation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceContext {
    pub payment_method_preference: PaymentMethodPreference,
    pub brand_name: String,
    pub locale: String,
    pub landing_page: LandingPage,
    pub shipping_preference: ShippingPreference,
    pub user_action: UserAction,
    pub return_url: String,
    pub cancel_url: String,
}

impl ExperienceContext {
    /// Build a context from fixed defaults and settings, then apply overrides
    ///
    /// Defaults: immediate payment, guest checkout, no shipping, pay now, and
    /// the configured brand, locale and redirect URLs.
    pub fn resolve(settings: &Settings, overrides: &ExperienceOverrides) -> Self {
        let overrides = overrides.clone();
        Self {
            payment_method_preference: overrides
                .payment_method_preference
                .unwrap_or(PaymentMethodPreference::ImmediatePaymentRequired),
            brand_name: overrides
                .brand_name
                .unwrap_or_else(|| settings.brand_name.clone()),
            locale: overrides.locale.unwrap_or_else(|| settings.locale.clone()),
            landing_page: overrides.landing_page.unwrap_or(LandingPage::GuestCheckout),
            shipping_preference: overrides
                .shipping_preference
                .unwrap_or(ShippingPreference::NoShipping),
            user_action: overrides.user_action.unwrap_or(UserAction::PayNow),
            return_url: overrides
                .return_url
                .unwrap_or_else(|| settings.return_url.clone()),
            cancel_url: overrides
                .cancel_url
                .unwrap_or_else(|| settings.cancel_url.clone()),
        }
    }
}

/// Caller overrides for [`ExperienceContext`]; `None` keeps the default
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperienceOverrides {
    pub payment_method_preference: Option<PaymentMethodPreference>,
    pub brand_name: Option<String>,
    pub locale: Option<String>,
    pub landing_page: Option<LandingPage>,
    pub shipping_preference: Option<ShippingPreference>,
    pub user_action: Option<UserAction>,
    pub return_url: Option<String>,
    pub cancel_url: Option<String>,
}

impl ExperienceOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_payment_method_preference(mut self, preference: PaymentMethodPreference) -> Self {
        self.payment_method_preference = Some(preference);
        self
    }

    pub fn with_brand_name(mut self, brand_name: impl Into<String>) -> Self {
        self.brand_name = Some(brand_name.into());
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn with_landing_page(mut self, landing_page: LandingPage) -> Self {
        self.landing_page = Some(landing_page);
        self
    }

    pub fn with_shipping_preference(mut self, preference: ShippingPreference) -> Self {
        self.shipping_preference = Some(preference);
        self
    }

    pub fn with_user_action(mut self, user_action: UserAction) -> Self {
        self.user_action = Some(user_action);
        self
    }

    pub fn with_return_url(mut self, url: impl Into<String>) -> Self {
        self.return_url = Some(url.into());
        self
    }

    pub fn with_cancel_url(mut self, url: impl Into<String>) -> Self {
        self.cancel_url = Some(url.into());
        self
    }
}

/// Money amount; `value` is a decimal string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    pub currency_code: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseUnit {
    pub amount: Amount,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayerName {
    pub given_name: String,
    pub surname: String,
}

/// `payment_source.paypal` block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaypalSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<PayerName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    pub experience_context: ExperienceContext,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSource {
    pub paypal: PaypalSource,
}

/// Body of `POST /v2/checkout/orders`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub intent: Intent,
    pub purchase_units: Vec<PurchaseUnit>,
    pub payment_source: PaymentSource,
}

impl OrderRequest {
    /// Build an order for a single purchase unit
    ///
    /// A settings instance supports exactly one currency: `currency` defaults
    /// to the configured one and any other value is rejected.
    pub fn new(
        settings: &Settings,
        amount: Decimal,
        currency: Option<&str>,
        intent: Intent,
        overrides: &ExperienceOverrides,
    ) -> Result<Self> {
        if let Some(requested) = currency {
            if !requested.eq_ignore_ascii_case(&settings.currency) {
                return Err(PaypalError::ConfigurationMismatch {
                    requested: requested.to_string(),
                    configured: settings.currency.clone(),
                });
            }
        }

        Ok(Self {
            intent,
            purchase_units: vec![PurchaseUnit {
                amount: Amount {
                    currency_code: settings.currency.clone(),
                    value: amount.to_string(),
                },
            }],
            payment_source: PaymentSource {
                paypal: PaypalSource {
                    name: None,
                    email_address: None,
                    experience_context: ExperienceContext::resolve(settings, overrides),
                },
            },
        })
    }
}

/// Caller overrides for an order confirmation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfirmOverrides {
    pub customer_given_name: Option<String>,
    pub customer_surname: Option<String>,
    pub customer_email: Option<String>,
    pub experience: ExperienceOverrides,
}

impl ConfirmOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_customer_name(
        mut self,
        given_name: impl Into<String>,
        surname: impl Into<String>,
    ) -> Self {
        self.customer_given_name = Some(given_name.into());
        self.customer_surname = Some(surname.into());
        self
    }

    pub fn with_customer_email(mut self, email: impl Into<String>) -> Self {
        self.customer_email = Some(email.into());
        self
    }

    pub fn with_experience(mut self, experience: ExperienceOverrides) -> Self {
        self.experience = experience;
        self
    }
}

/// Body of `POST /v2/checkout/orders/{id}/confirm-payment-source`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmRequest {
    pub payment_source: PaymentSource,
}

impl ConfirmRequest {
    /// Build a confirmation from a previously fetched order
    ///
    /// Payer name and email come from `order` unless overridden. The order must
    /// carry `payer.name.given_name`, `payer.name.surname` and
    /// `payer.email_address` for every field that is not overridden.
    pub fn new(settings: &Settings, order: &Record, overrides: &ConfirmOverrides) -> Result<Self> {
        let field = |value: &Option<String>, path: &str| -> Result<String> {
            match value {
                Some(v) => Ok(v.clone()),
                None => order
                    .get_str(path)
                    .map(str::to_string)
                    .ok_or_else(|| PaypalError::precondition_unmet(path)),
            }
        };

        let given_name = field(&overrides.customer_given_name, "payer.name.given_name")?;
        let surname = field(&overrides.customer_surname, "payer.name.surname")?;
        let email_address = field(&overrides.customer_email, "payer.email_address")?;

        Ok(Self {
            payment_source: PaymentSource {
                paypal: PaypalSource {
                    name: Some(PayerName {
                        given_name,
                        surname,
                    }),
                    email_address: Some(email_address),
                    experience_context: ExperienceContext::resolve(settings, &overrides.experience),
                },
            },
        })
    }
}
