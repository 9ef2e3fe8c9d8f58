//! PayPal REST client
//!
//! [`PaypalClient`] exposes one async method per PayPal operation. Every
//! authenticated call fetches a fresh OAuth2 token, builds its payload from the
//! client's [`Settings`] plus caller overrides, sends a single request and maps
//! the status code to a record or a [`PaypalError`].
//!
//! # Examples
//!
//! ## Create and capture an order
//!
//! ```no_run
//! use rust_paypal::{ExperienceOverrides, Intent, PaypalClient, Settings};
//! use rust_decimal::Decimal;
//!
//! # async fn example() -> rust_paypal::Result<()> {
//! let client = PaypalClient::new(Settings::load())?;
//!
//! let order = client
//!     .create_order(Decimal::new(1000, 1), None, Intent::Capture, &ExperienceOverrides::default())
//!     .await?;
//! println!("Send the buyer to: {:?}", order.link("payer-action"));
//!
//! // ... once the buyer has approved the order
//! # let order_id = order.id().unwrap_or_default().to_string();
//! let capture = client.capture_order(&order_id).await?;
//! println!("Capture status: {:?}", capture.status());
//! # Ok(())
//! # }
//! ```
//!
//! ## Legacy payment
//!
//! ```no_run
//! use rust_paypal::{PaypalClient, Settings};
//!
//! # async fn example() -> rust_paypal::Result<()> {
//! let client = PaypalClient::new(Settings::load())?;
//! let payment = client.create_payment(10, "10 credits").await?;
//! println!("Approval URL: {:?}", payment.link("approval_url"));
//! # Ok(())
//! # }
//! ```

use crate::error::Operation;
use crate::settings::Settings;
use crate::types::{
    validate_patch, AccessToken, ConfirmOverrides, ConfirmRequest, ExecutePaymentRequest,
    ExperienceOverrides, Intent, OrderRequest, PatchOperation, PaymentRequest, Record,
    TokenResponse,
};
use crate::{PaypalError, Result};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use rust_decimal::Decimal;
use std::time::Duration;


/// Characters left unescaped in a single URL path segment
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Client for the PayPal Orders v2 and Payments v1 APIs
#[derive(Clone)]
pub struct PaypalClient {
    settings: Settings,
    client: Client,
}

impl std::fmt::Debug for PaypalClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaypalClient")
            .field("settings", &self.settings)
            .finish()
    }
}

/// Builder for [`PaypalClient`]
#[derive(Debug)]
pub struct PaypalClientBuilder {
    settings: Settings,
    timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl PaypalClientBuilder {
    /// Set a request timeout on the underlying HTTP client
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use a preconfigured HTTP client; any timeout set here is ignored
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Validate the settings and build the client
    pub fn build(self) -> Result<PaypalClient> {
        self.settings.validate()?;

        let client = match self.http_client {
            Some(client) => client,
            None => {
                let mut client_builder = Client::builder();
                if let Some(timeout) = self.timeout {
                    client_builder = client_builder.timeout(timeout);
                }
                client_builder.build().map_err(|e| {
                    PaypalError::config(format!("Failed to create HTTP client: {}", e))
                })?
            }
        };

        Ok(PaypalClient {
            settings: self.settings,
            client,
        })
    }
}

impl PaypalClient {
    /// Create a client with default HTTP settings
    pub fn new(settings: Settings) -> Result<Self> {
        Self::builder(settings).build()
    }

    /// Start building a client around `settings`
    pub fn builder(settings: Settings) -> PaypalClientBuilder {
        PaypalClientBuilder {
            settings,
            timeout: None,
            http_client: None,
        }
    }

    /// Settings used by every call
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Mutable settings; changes apply to subsequent calls
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Exchange the client credentials for a bearer token
    pub async fn fetch_access_token(&self) -> Result<AccessToken> {
        tracing::debug!("Requesting access token from: {}", self.settings.token_url);

        let response = self
            .client
            .post(&self.settings.token_url)
            .basic_auth(&self.settings.client_id, Some(&self.settings.client_secret))
            .header(ACCEPT, "application/json")
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = read_body(response).await;
            tracing::error!(
                "Access token request failed with status: {}. Response body: {}",
                status,
                body
            );
            return Err(PaypalError::AuthenticationFailed {
                status: status.as_u16(),
                body,
            });
        }

        let token: TokenResponse = response.json().await?;
        token.into_access_token()
    }

    /// Create an order for `amount`
    ///
    /// `currency` defaults to the configured currency; any other currency fails
    /// with [`PaypalError::ConfigurationMismatch`] before a request is sent.
    pub async fn create_order(
        &self,
        amount: Decimal,
        currency: Option<&str>,
        intent: Intent,
        overrides: &ExperienceOverrides,
    ) -> Result<Record> {
        let body = OrderRequest::new(&self.settings, amount, currency, intent, overrides)?;
        tracing::debug!(
            "Create order request body: {}",
            serde_json::to_string_pretty(&body).unwrap_or_default()
        );

        let request = self
            .authorized(Method::POST, &self.settings.order_url)
            .await?
            .json(&body);

        // 201 on creation, 200 when PayPal replays an identical request
        self.dispatch(
            Operation::CreateOrder,
            request,
            &[StatusCode::CREATED, StatusCode::OK],
        )
        .await
    }

    /// Capture payment for an approved order
    pub async fn capture_order(&self, order_id: &str) -> Result<Record> {
        let url = resource_url(&self.settings.order_url, &[order_id, "capture"]);
        let request = self
            .authorized(Method::POST, &url)
            .await?
            .header(CONTENT_TYPE, "application/json");

        self.dispatch(Operation::CaptureOrder, request, &[StatusCode::CREATED])
            .await
    }

    /// Fetch the full order record
    pub async fn show_order_details(&self, order_id: &str) -> Result<Record> {
        let url = resource_url(&self.settings.order_url, &[order_id]);
        let request = self.authorized(Method::GET, &url).await?;

        self.dispatch(Operation::ShowOrderDetails, request, &[StatusCode::OK])
            .await
    }

    /// Apply JSON-Patch style operations to an order
    ///
    /// Operations are only checked for structure; an unknown path surfaces as
    /// a 4xx [`PaypalError::RemoteOperationFailed`].
    pub async fn update_order(
        &self,
        order_id: &str,
        operations: &[PatchOperation],
    ) -> Result<Record> {
        validate_patch(operations)?;

        let url = resource_url(&self.settings.order_url, &[order_id]);
        let request = self
            .authorized(Method::PATCH, &url)
            .await?
            .json(operations);

        self.dispatch(
            Operation::UpdateOrder,
            request,
            &[StatusCode::OK, StatusCode::NO_CONTENT],
        )
        .await
    }

    /// Confirm the PayPal payment source of an order
    ///
    /// `order` is a record previously returned by [`create_order`] or
    /// [`show_order_details`]; payer name and email are taken from it unless
    /// overridden.
    ///
    /// [`create_order`]: PaypalClient::create_order
    /// [`show_order_details`]: PaypalClient::show_order_details
    pub async fn confirm_order(
        &self,
        order: &Record,
        overrides: &ConfirmOverrides,
    ) -> Result<Record> {
        let order_id = order.id().ok_or_else(|| PaypalError::precondition_unmet("id"))?;
        let body = ConfirmRequest::new(&self.settings, order, overrides)?;

        let url = resource_url(
            &self.settings.order_url,
            &[order_id, "confirm-payment-source"],
        );
        let request = self.authorized(Method::POST, &url).await?.json(&body);

        self.dispatch(Operation::ConfirmOrder, request, &[StatusCode::OK])
            .await
    }

    /// Create a legacy v1 sale of `payment_value` credits
    pub async fn create_payment(
        &self,
        payment_value: u32,
        description: impl Into<String>,
    ) -> Result<Record> {
        let body = PaymentRequest::new(&self.settings, payment_value, description);
        tracing::debug!(
            "Create payment request body: {}",
            serde_json::to_string_pretty(&body).unwrap_or_default()
        );

        let request = self
            .authorized(Method::POST, &self.settings.payment_url)
            .await?
            .json(&body);

        self.dispatch_any_success(Operation::CreatePayment, request)
            .await
    }

    /// Execute a legacy v1 payment the buyer has approved
    pub async fn execute_payment(&self, payment_id: &str, payer_id: &str) -> Result<Record> {
        let url = resource_url(&self.settings.payment_url, &[payment_id, "execute"]);
        let body = ExecutePaymentRequest {
            payer_id: payer_id.to_string(),
        };
        let request = self.authorized(Method::POST, &url).await?.json(&body);

        self.dispatch_any_success(Operation::ExecutePayment, request)
            .await
    }

    /// Fetch a token and start a bearer-authenticated request
    async fn authorized(&self, method: Method, url: &str) -> Result<RequestBuilder> {
        let token = self.fetch_access_token().await?;
        tracing::debug!("Sending {} request to: {}", method, url);

        Ok(self
            .client
            .request(method, url)
            .bearer_auth(token.as_str())
            .header(ACCEPT, "application/json"))
    }

    async fn dispatch(
        &self,
        operation: Operation,
        request: RequestBuilder,
        accepted: &[StatusCode],
    ) -> Result<Record> {
        let response = request.send().await?;
        let status = response.status();

        if !accepted.contains(&status) {
            return Err(remote_failure(operation, response).await);
        }

        parse_record(response).await
    }

    async fn dispatch_any_success(
        &self,
        operation: Operation,
        request: RequestBuilder,
    ) -> Result<Record> {
        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(remote_failure(operation, response).await);
        }

        parse_record(response).await
    }
}

/// Join `segments` onto `base`, escaping each as a single path segment
fn resource_url(base: &str, segments: &[&str]) -> String {
    let mut url = base.trim_end_matches('/').to_string();
    for segment in segments {
        url.push('/');
        url.extend(utf8_percent_encode(segment, PATH_SEGMENT));
    }
    url
}

async fn read_body(response: Response) -> String {
    response
        .text()
        .await
        .unwrap_or_else(|_| "Unable to read response body".to_string())
}

async fn remote_failure(operation: Operation, response: Response) -> PaypalError {
    let status = response.status();
    let body = read_body(response).await;
    tracing::error!(
        "PayPal {} failed with status: {}. Response body: {}",
        operation,
        status,
        body
    );
    PaypalError::remote(operation, status.as_u16(), body)
}

/// Parse a success body; an empty body yields an empty record
async fn parse_record(response: Response) -> Result<Record> {
    let body = response.text().await?;
    if body.trim().is_empty() {
        return Ok(Record::empty());
    }
    Ok(serde_json::from_str(&body)?)
}
