use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PremiumInfo {
    /// Public key of the payment gateway, used by the checkout widget.
    pub public_key: Option<String>,
    pub is_premium: bool,
}

/// Payment request as sent by the checkout page. `amount` is in major currency units and
/// may arrive as a number or a numeric string.
#[derive(Debug, Deserialize, ToSchema)]
pub struct PaymentRequest {
    #[schema(value_type = f64)]
    pub amount: Value,
    #[serde(default = "default_plan")]
    pub plan: String,
}

fn default_plan() -> String {
    "monthly".to_owned()
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaymentResponse {
    pub status: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub data: Option<Value>,
}

impl PaymentResponse {
    pub fn success<M: Into<String>>(message: M, data: Value) -> Self {
        Self {
            status: true,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn failure<M: Into<String>>(message: M) -> Self {
        Self {
            status: false,
            message: message.into(),
            data: None,
        }
    }
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct VerifyQuery {
    pub reference: Option<String>,
}

/// Short user-facing notice, the api counterpart of a flashed message.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FlashMessage {
    pub message: String,
}

impl FlashMessage {
    pub fn new<M: Into<String>>(message: M) -> Self {
        Self {
            message: message.into(),
        }
    }
}
