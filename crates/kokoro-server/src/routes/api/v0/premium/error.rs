use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use kokoro_core::payment::error::PaymentError;
use kokoro_core::premium::PremiumError;
use kokoro_model::premium::{FlashMessage, PaymentResponse};
use std::error::Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum PremiumApiError {
    #[error("Invalid payment reference")]
    MissingReference,

    #[error("payment initialization failed")]
    Initialize(#[source] PaymentError),

    #[error("payment verification failed")]
    Verify(#[from] PremiumError),
}

fn initialize_failure(error: &PaymentError) -> (StatusCode, String) {
    match error {
        PaymentError::InvalidAmount | PaymentError::Rejected(_) => (StatusCode::BAD_REQUEST, error.to_string()),
        PaymentError::NotConfigured => (StatusCode::SERVICE_UNAVAILABLE, error.to_string()),
        _ => {
            tracing::error!(error = error as &dyn Error, "payment gateway unreachable");
            (StatusCode::BAD_GATEWAY, "Error initializing payment".to_owned())
        }
    }
}

fn verify_failure(error: &PremiumError) -> (StatusCode, String) {
    match error {
        PremiumError::UserNotFound => (StatusCode::NOT_FOUND, error.to_string()),
        PremiumError::Payment(PaymentError::VerificationFailed | PaymentError::Rejected(_)) => {
            (StatusCode::BAD_REQUEST, PaymentError::VerificationFailed.to_string())
        }
        PremiumError::Payment(PaymentError::NotConfigured) => {
            (StatusCode::SERVICE_UNAVAILABLE, PaymentError::NotConfigured.to_string())
        }
        PremiumError::Payment(payment) => {
            tracing::error!(error = payment as &dyn Error, "payment gateway unreachable");
            (StatusCode::BAD_GATEWAY, "Error verifying payment".to_owned())
        }
        _ => {
            tracing::error!(error = error as &dyn Error, "failed to upgrade user");
            (StatusCode::INTERNAL_SERVER_ERROR, "Error verifying payment".to_owned())
        }
    }
}

impl IntoResponse for PremiumApiError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingReference => {
                (StatusCode::BAD_REQUEST, Json(FlashMessage::new(self.to_string()))).into_response()
            }
            Self::Initialize(error) => {
                let (status, message) = initialize_failure(&error);
                (status, Json(PaymentResponse::failure(message))).into_response()
            }
            Self::Verify(error) => {
                let (status, message) = verify_failure(&error);
                (status, Json(FlashMessage::new(message))).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_failures() {
        assert_eq!(
            initialize_failure(&PaymentError::InvalidAmount),
            (StatusCode::BAD_REQUEST, "Invalid amount".to_owned())
        );
        assert_eq!(
            initialize_failure(&PaymentError::Rejected("Invalid key".into())),
            (StatusCode::BAD_REQUEST, "Invalid key".to_owned())
        );
        assert_eq!(
            initialize_failure(&PaymentError::NotConfigured).0,
            StatusCode::SERVICE_UNAVAILABLE
        );
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(
            initialize_failure(&PaymentError::Parse(parse)),
            (StatusCode::BAD_GATEWAY, "Error initializing payment".to_owned())
        );
    }

    #[test]
    fn test_verify_failures() {
        assert_eq!(
            verify_failure(&PremiumError::UserNotFound),
            (StatusCode::NOT_FOUND, "User not found".to_owned())
        );
        assert_eq!(
            verify_failure(&PremiumError::Payment(PaymentError::VerificationFailed)),
            (StatusCode::BAD_REQUEST, "Payment verification failed".to_owned())
        );
        assert_eq!(
            verify_failure(&PremiumError::Db(sea_orm::DbErr::Custom("down".into()))).0,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
