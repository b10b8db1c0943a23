use crate::payment::error::PaymentError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;
use uuid::Uuid;

pub mod config;
pub mod error;
pub mod paystack;

pub use paystack::PaystackClient;

/// Carried through the checkout and handed back on verification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMetadata {
    pub user_id: Uuid,
    pub plan: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InitializeRequest {
    pub email: String,
    /// Amount in the smallest currency unit.
    pub amount: u64,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<Url>,
    pub metadata: PaymentMetadata,
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Starts a checkout and returns the gateway's `data` object (authorization url,
    /// access code and reference).
    async fn initialize(&self, request: &InitializeRequest) -> Result<Value, PaymentError>;

    /// Confirms a finished checkout. Only successful transactions return their metadata.
    async fn verify(&self, reference: &str) -> Result<PaymentMetadata, PaymentError>;
}

/// Converts an amount in major units, given as a json number or numeric string, into
/// minor units. Fractions of a minor unit are truncated.
pub fn amount_to_minor(amount: &Value) -> Result<u64, PaymentError> {
    let amount = match amount {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
    .ok_or(PaymentError::InvalidAmount)?;

    if !amount.is_finite() || amount <= 0.0 {
        return Err(PaymentError::InvalidAmount);
    }
    let minor = (amount * 100.0).trunc();
    if minor < 1.0 || minor >= u64::MAX as f64 {
        return Err(PaymentError::InvalidAmount);
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Ok(minor as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_amount_to_minor() {
        assert_eq!(amount_to_minor(&json!(500)).unwrap(), 50_000);
        assert_eq!(amount_to_minor(&json!(19.99)).unwrap(), 1998, "truncated like an integer cast");
        assert_eq!(amount_to_minor(&json!("250.5")).unwrap(), 25_050);
        assert_eq!(amount_to_minor(&json!(" 10 ")).unwrap(), 1000);
    }

    #[test]
    fn test_invalid_amounts() {
        for amount in [json!(0), json!(-5), json!("abc"), json!(null), json!([1]), json!("NaN"), json!("inf"), json!(0.001)] {
            assert!(
                matches!(amount_to_minor(&amount), Err(PaymentError::InvalidAmount)),
                "{amount} should be rejected"
            );
        }
    }

    #[test]
    fn test_initialize_request_shape() {
        let user_id = Uuid::new_v4();
        let request = InitializeRequest {
            email: "ada@example.com".to_owned(),
            amount: 50_000,
            currency: "KES".to_owned(),
            callback_url: None,
            metadata: PaymentMetadata {
                user_id,
                plan: "monthly".to_owned(),
            },
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "email": "ada@example.com",
                "amount": 50_000,
                "currency": "KES",
                "metadata": {"user_id": user_id, "plan": "monthly"},
            })
        );
    }
}
