//! OAuth2 access token types

use crate::{PaypalError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bearer token returned by the client-credentials exchange
///
/// Tokens are fetched for a single operation and dropped right after; they are
/// never cached. The value is redacted from `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wrap a raw token string
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Raw token, for the `Authorization: Bearer` header
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&"<redacted>").finish()
    }
}

/// Body of a successful `POST /v1/oauth2/token`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    /// Lifetime in seconds; informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
}

impl TokenResponse {
    /// Extract the bearer token
    pub fn into_access_token(self) -> Result<AccessToken> {
        match self.access_token {
            Some(token) if !token.is_empty() => Ok(AccessToken(token)),
            _ => Err(PaypalError::invalid_response(
                "token response has no access_token",
            )),
        }
    }
}
