pub(crate) mod error;

use crate::AppConfig;
use crate::routes::api::v0::premium::error::PremiumApiError;
use crate::user::ExtractUser;
use axum::extract::Query;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::Utc;
use kokoro_core::payment::{InitializeRequest, PaymentMetadata, amount_to_minor};
use kokoro_core::premium;
use kokoro_model::premium::{FlashMessage, PaymentRequest, PaymentResponse, PremiumInfo, VerifyQuery};
use sea_orm::DatabaseConnection;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(get_premium))
        .route("/payments", post(initialize_payment))
        .route("/payments/verify", get(verify_payment))
        .with_state(())
}

#[utoipa::path(
    get,
    path = "/api/v0/premium",
    responses(
        (status = OK, description = "Premium state of the user and the checkout key", body = PremiumInfo),
    ),
    tag = "v0/premium",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn get_premium(
    ExtractUser(user): ExtractUser,
    Extension(app_config): Extension<AppConfig>,
) -> impl IntoResponse {
    Json(PremiumInfo {
        public_key: app_config.payment_config().public_key.clone(),
        is_premium: user.is_premium_active(Utc::now().fixed_offset()),
    })
}

#[utoipa::path(
    post,
    path = "/api/v0/premium/payments",
    request_body = PaymentRequest,
    responses(
        (status = OK, description = "Checkout started", body = PaymentResponse),
        (status = BAD_REQUEST, description = "Invalid amount or rejected by the gateway", body = PaymentResponse),
        (status = BAD_GATEWAY, description = "Gateway not reachable", body = PaymentResponse),
    ),
    tag = "v0/premium",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn initialize_payment(
    ExtractUser(user): ExtractUser,
    Extension(app_config): Extension<AppConfig>,
    Json(request): Json<PaymentRequest>,
) -> Result<impl IntoResponse, PremiumApiError> {
    let amount = amount_to_minor(&request.amount).map_err(PremiumApiError::Initialize)?;
    let config = app_config.payment_config();
    let request = InitializeRequest {
        email: user.email,
        amount,
        currency: config.currency.clone(),
        callback_url: config.callback_url.clone(),
        metadata: PaymentMetadata {
            user_id: user.id,
            plan: request.plan,
        },
    };
    let data = app_config
        .payments()
        .initialize(&request)
        .await
        .map_err(PremiumApiError::Initialize)?;
    tracing::info!(user = %user.id, amount, "payment initialized");
    Ok(Json(PaymentResponse::success("Payment initialized", data)))
}

#[utoipa::path(
    get,
    path = "/api/v0/premium/payments/verify",
    params(VerifyQuery),
    responses(
        (status = OK, description = "Payment verified, premium activated", body = FlashMessage),
        (status = BAD_REQUEST, description = "Missing reference or unsuccessful payment", body = FlashMessage),
        (status = NOT_FOUND, description = "User of the payment does not exist", body = FlashMessage),
    ),
    tag = "v0/premium",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn verify_payment(
    ExtractUser(_user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Extension(app_config): Extension<AppConfig>,
    Query(query): Query<VerifyQuery>,
) -> Result<impl IntoResponse, PremiumApiError> {
    let reference = query
        .reference
        .filter(|reference| !reference.is_empty())
        .ok_or(PremiumApiError::MissingReference)?;
    premium::verify_payment(
        &conn,
        app_config.payments().as_ref(),
        &reference,
        Utc::now().fixed_offset(),
    )
    .await?;
    Ok(Json(FlashMessage::new("Payment successful! Account upgraded to premium.")))
}
