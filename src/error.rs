//! Error types for the PayPal client
//!
//! Every fallible operation in this crate returns [`Result`]. Errors are raised
//! at the call site that detects the problem and never recovered locally; the
//! host application decides whether to retry.

use std::fmt;
use thiserror::Error;

/// Result type alias for PayPal operations
pub type Result<T> = std::result::Result<T, PaypalError>;

/// Remote operation that produced a [`PaypalError::RemoteOperationFailed`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CreateOrder,
    CaptureOrder,
    ShowOrderDetails,
    UpdateOrder,
    ConfirmOrder,
    CreatePayment,
    ExecutePayment,
}

impl Operation {
    /// Stable snake_case name, used in logs and error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::CreateOrder => "create_order",
            Operation::CaptureOrder => "capture_order",
            Operation::ShowOrderDetails => "show_order_details",
            Operation::UpdateOrder => "update_order",
            Operation::ConfirmOrder => "confirm_order",
            Operation::CreatePayment => "create_payment",
            Operation::ExecutePayment => "execute_payment",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while talking to PayPal
#[derive(Debug, Error)]
pub enum PaypalError {
    /// The token endpoint rejected the client credentials
    #[error("Authentication failed with status {status}: {body}")]
    AuthenticationFailed { status: u16, body: String },

    /// Caller-supplied currency differs from the configured one
    #[error("Currency mismatch: requested {requested}, configured {configured}")]
    ConfigurationMismatch {
        requested: String,
        configured: String,
    },

    /// PayPal answered an operation with an unexpected status
    #[error("{operation} failed with status {status}: {body}")]
    RemoteOperationFailed {
        operation: Operation,
        status: u16,
        body: String,
    },

    /// A field required to build the request is absent
    #[error("Precondition unmet: missing {field}")]
    PreconditionUnmet { field: String },

    /// A patch operation is structurally invalid
    #[error("Invalid patch operation at index {index}: {reason}")]
    InvalidPatch { index: usize, reason: String },

    /// A success response did not have the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PaypalError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an invalid response error
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }

    /// Create a precondition error for a missing field
    pub fn precondition_unmet(field: impl Into<String>) -> Self {
        Self::PreconditionUnmet {
            field: field.into(),
        }
    }

    /// Create an invalid patch error
    pub fn invalid_patch(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidPatch {
            index,
            reason: reason.into(),
        }
    }

    /// Create a remote failure error for an operation
    pub fn remote(operation: Operation, status: u16, body: impl Into<String>) -> Self {
        Self::RemoteOperationFailed {
            operation,
            status,
            body: body.into(),
        }
    }

    /// HTTP status reported by PayPal, if the error came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::AuthenticationFailed { status, .. }
            | Self::RemoteOperationFailed { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether retrying the same call could succeed
    ///
    /// Transport failures and 5xx answers are retryable; everything else
    /// needs the caller to change the request or the configuration.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(e) => e.is_timeout() || e.is_connect(),
            Self::RemoteOperationFailed { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_message() {
        let err = PaypalError::remote(Operation::CaptureOrder, 422, "{\"name\":\"UNPROCESSABLE_ENTITY\"}");
        let msg = err.to_string();
        assert!(msg.contains("capture_order"));
        assert!(msg.contains("422"));
        assert!(msg.contains("UNPROCESSABLE_ENTITY"));
        assert_eq!(err.status(), Some(422));
    }

    #[test]
    fn test_retryable_classification() {
        assert!(PaypalError::remote(Operation::CreateOrder, 503, "").is_retryable());
        assert!(!PaypalError::remote(Operation::CreateOrder, 400, "").is_retryable());
        assert!(!PaypalError::AuthenticationFailed {
            status: 401,
            body: String::new()
        }
        .is_retryable());
        assert!(!PaypalError::precondition_unmet("payer.email_address").is_retryable());
    }

    #[test]
    fn test_mismatch_message() {
        let err = PaypalError::ConfigurationMismatch {
            requested: "USD".to_string(),
            configured: "EUR".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Currency mismatch: requested USD, configured EUR"
        );
        assert_eq!(err.status(), None);
    }
}
