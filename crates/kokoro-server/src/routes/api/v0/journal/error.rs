use crate::routes::error::{ErrorData, ErrorDataProvider, GetStatusCode, error_to_axum_response};
use axum::response::{IntoResponse, Redirect, Response};
use kokoro_core::premium::PremiumError;
use sea_orm::DbErr;
use serde::Serialize;
use std::error::Error;
use thiserror::Error;
use utoipa::ToSchema;

/// Where requests touching another user's entry are sent.
pub(crate) const ENTRIES_LOCATION: &str = "/api/v0/journal/entries";

#[derive(Error, Debug)]
pub(crate) enum JournalError {
    #[error("Database error.")]
    SeaOrmError(#[from] DbErr),

    #[error("Journal entry could not be found")]
    NotFound,

    #[error("Journal entry belongs to another user")]
    NotOwner,

    #[error(transparent)]
    Premium(#[from] PremiumError),
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub(crate) enum JournalErrorType {
    FreeTierLimitReached,
}

impl GetStatusCode for JournalErrorType {
    fn status_code(&self) -> http::StatusCode {
        match self {
            Self::FreeTierLimitReached => http::StatusCode::PAYMENT_REQUIRED,
        }
    }
}

impl GetStatusCode for JournalError {
    fn status_code(&self) -> http::StatusCode {
        match self {
            Self::NotFound | Self::SeaOrmError(DbErr::RecordNotFound(_)) => http::StatusCode::NOT_FOUND,
            Self::NotOwner => http::StatusCode::SEE_OTHER,
            _ => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ErrorDataProvider<JournalErrorType> for JournalError {
    fn error_data(self) -> Option<ErrorData<JournalErrorType>> {
        match self {
            Self::Premium(error @ PremiumError::FreeTierLimitReached) => Some(ErrorData::new(
                JournalErrorType::FreeTierLimitReached,
                error.to_string(),
            )),
            _ => None,
        }
    }
}

impl IntoResponse for JournalError {
    fn into_response(self) -> Response {
        match &self {
            Self::NotOwner => return Redirect::to(ENTRIES_LOCATION).into_response(),
            Self::SeaOrmError(DbErr::RecordNotFound(_)) | Self::NotFound => {}
            Self::SeaOrmError(error) | Self::Premium(PremiumError::Db(error)) => {
                tracing::error!(error = error as &dyn Error, "journal request failed");
            }
            Self::Premium(PremiumError::FreeTierLimitReached) => {}
            Self::Premium(error) => {
                tracing::error!(error = error as &dyn Error, "journal request failed");
            }
        }
        error_to_axum_response(self)
    }
}
