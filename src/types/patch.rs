//! JSON-Patch style operations for order updates
//!
//! PayPal only accepts `add`, `remove` and `replace` on orders. Operations are
//! checked for structure before they are sent; whether a path actually exists
//! on the order is left to PayPal, which answers 4xx for bad paths.

use crate::{PaypalError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Patch verb
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchOp {
    Add,
    Remove,
    Replace,
}

/// A single patch instruction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchOperation {
    pub op: PatchOp,
    /// JSON pointer into the order, e.g. `/purchase_units/@reference_id=='default'/amount`
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl PatchOperation {
    /// Add `value` at `path`
    pub fn add(path: impl Into<String>, value: Value) -> Self {
        Self {
            op: PatchOp::Add,
            path: path.into(),
            value: Some(value),
        }
    }

    /// Replace the value at `path`
    pub fn replace(path: impl Into<String>, value: Value) -> Self {
        Self {
            op: PatchOp::Replace,
            path: path.into(),
            value: Some(value),
        }
    }

    /// Remove the value at `path`
    pub fn remove(path: impl Into<String>) -> Self {
        Self {
            op: PatchOp::Remove,
            path: path.into(),
            value: None,
        }
    }

    fn validate(&self, index: usize) -> Result<()> {
        if !self.path.starts_with('/') {
            return Err(PaypalError::invalid_patch(
                index,
                format!("path '{}' must start with '/'", self.path),
            ));
        }
        match (self.op, &self.value) {
            (PatchOp::Add | PatchOp::Replace, None) => Err(PaypalError::invalid_patch(
                index,
                "add and replace require a value",
            )),
            (PatchOp::Remove, Some(_)) => Err(PaypalError::invalid_patch(
                index,
                "remove must not carry a value",
            )),
            _ => Ok(()),
        }
    }
}

/// Check every operation of a patch document
pub fn validate_patch(operations: &[PatchOperation]) -> Result<()> {
    operations
        .iter()
        .enumerate()
        .try_for_each(|(index, operation)| operation.validate(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_patch_serialization() {
        let ops = vec![
            PatchOperation::replace(
                "/purchase_units/@reference_id=='default'/amount",
                json!({"currency_code": "EUR", "value": "120.00"}),
            ),
            PatchOperation::remove("/purchase_units/@reference_id=='default'/shipping/address"),
        ];

        let value = serde_json::to_value(&ops).unwrap();
        assert_eq!(value[0]["op"], "replace");
        assert_eq!(value[0]["value"]["value"], "120.00");
        assert_eq!(value[1]["op"], "remove");
        assert!(value[1].get("value").is_none());
    }

    #[test]
    fn test_valid_patch_passes() {
        let ops = vec![
            PatchOperation::add("/purchase_units/@reference_id=='default'/invoice_id", json!("INV-1")),
            PatchOperation::remove("/purchase_units/@reference_id=='default'/description"),
        ];
        assert!(validate_patch(&ops).is_ok());
        assert!(validate_patch(&[]).is_ok());
    }

    #[test]
    fn test_relative_path_rejected() {
        let ops = vec![
            PatchOperation::add("/intent", json!("CAPTURE")),
            PatchOperation::replace("intent", json!("AUTHORIZE")),
        ];
        match validate_patch(&ops).unwrap_err() {
            PaypalError::InvalidPatch { index, reason } => {
                assert_eq!(index, 1);
                assert!(reason.contains("must start with '/'"));
            }
            other => panic!("Expected InvalidPatch, got: {:?}", other),
        }
    }

    #[test]
    fn test_value_presence_checked() {
        let missing_value = PatchOperation {
            op: PatchOp::Replace,
            path: "/intent".to_string(),
            value: None,
        };
        assert!(validate_patch(&[missing_value]).is_err());

        let remove_with_value = PatchOperation {
            op: PatchOp::Remove,
            path: "/intent".to_string(),
            value: Some(json!("CAPTURE")),
        };
        assert!(validate_patch(&[remove_with_value]).is_err());
    }

    #[test]
    fn test_unknown_op_fails_to_deserialize() {
        let result: std::result::Result<PatchOperation, _> =
            serde_json::from_value(json!({"op": "move", "path": "/a", "from": "/b"}));
        assert!(result.is_err());
    }
}
