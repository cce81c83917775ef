use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

/// A validated transfer request
///
/// Produced only by [`crate::transfer::validate::parse_transfer_request`];
/// exists for the duration of one request and is never persisted. Recipient
/// INNs are canonical digit strings in request order, duplicates preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferRequest {
    /// Source account ID (the account to debit)
    pub from_user_id: i64,
    /// Recipient INNs, order preserved
    pub to_users_inn: Vec<String>,
    /// Total amount to debit, 2 decimal places, >= 0.01
    pub debit_amount: Decimal,
}

/// Success body for the transfer endpoint
///
/// Serializes to `{"Success": "Money transfer successful."}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct TransferSuccess {
    #[serde(rename = "Success")]
    #[schema(example = "Money transfer successful.")]
    pub success: String,
}

impl TransferSuccess {
    pub fn new() -> Self {
        Self {
            success: "Money transfer successful.".to_string(),
        }
    }
}

impl Default for TransferSuccess {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_body_shape() {
        let body = serde_json::to_value(TransferSuccess::new()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"Success": "Money transfer successful."})
        );
    }
}
