use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Invalid amount")]
    InvalidAmount,
    #[error("Payment gateway is not configured")]
    NotConfigured,
    #[error("{0}")]
    Rejected(String),
    #[error("Payment verification failed")]
    VerificationFailed,
    #[error("invalid gateway url")]
    InvalidUrl,
    #[error(transparent)]
    Request(#[from] reqwest::Error),
    #[error("unexpected gateway response: {0}")]
    Parse(#[from] serde_json::Error),
}
