use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error(transparent)]
    Request(#[from] reqwest::Error),
    #[error("classifier answered with {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("unexpected classifier response: {0}")]
    Parse(#[from] serde_json::Error),
}
