use crate::auth::{hash_password, verify_password};
use crate::routes::error::{ErrorData, LoginError, LoginErrorType};
use crate::user::ExtractUserId;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Extension, Json, Router};
use http::StatusCode;
use kokoro_db::{access_tokens, user};
use kokoro_model::login::{Credentials, Registration, Token};
use kokoro_model::user::User;
use kokoro_model_tools::convert::FromDbModel;
use sea_orm::{DatabaseConnection, DbErr, SqlErr};
use std::error::Error;

pub fn create_router<S: Clone + Send + Sync + 'static>() -> Router<S> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .with_state(())
}

fn require(value: &str, field: &'static str) -> Result<(), LoginError> {
    if value.trim().is_empty() {
        return Err(LoginError::MissingField(field));
    }
    Ok(())
}

// A registration racing past the lookups still trips the unique columns.
fn creation_error(error: DbErr) -> LoginError {
    match error.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(message)) if message.contains("email") => LoginError::EmailTaken,
        Some(SqlErr::UniqueConstraintViolation(_)) => LoginError::UsernameTaken,
        _ => LoginError::DatabaseError(error),
    }
}

#[utoipa::path(
    post,
    path = "/register",
    request_body = Registration,
    responses(
        (status = CREATED, description = "User registered", body = User),
        (status = CONFLICT, description = "Username or email already in use", body = ErrorData<LoginErrorType>),
        (status = BAD_REQUEST, description = "A field is empty", body = ErrorData<LoginErrorType>),
    ),
    tag = "auth"
)]
pub(crate) async fn register(
    Extension(conn): Extension<DatabaseConnection>,
    Json(registration): Json<Registration>,
) -> Result<impl IntoResponse, LoginError> {
    let Registration {
        username,
        email,
        password,
    } = registration;
    require(&username, "username")?;
    require(&email, "email")?;
    require(&password, "password")?;

    if user::Query::find_by_username(&conn, &username).await?.is_some() {
        return Err(LoginError::UsernameTaken);
    }
    if user::Query::find_by_email(&conn, &email).await?.is_some() {
        return Err(LoginError::EmailTaken);
    }

    let password_hash = hash_password(&password)
        .inspect_err(|error| tracing::error!(error = error as &dyn Error, "could not hash password"))?;
    let user = user::Mutation::create_user(&conn, username, email, password_hash)
        .await
        .map_err(creation_error)?;
    tracing::info!(user = %user.id, "user registered");

    Ok((StatusCode::CREATED, Json(User::from_db_model(user))))
}

#[utoipa::path(
    post,
    path = "/login",
    request_body = Credentials,
    responses(
        (status = OK, description = "Successful login, returns Bearer token", body = Token, example = json!( Token { access_token: "abcToken12345678".into() })),
        (status = UNAUTHORIZED, description = "Unknown user or wrong password", body = ErrorData<LoginErrorType>),
    ),
    tag = "auth"
)]
pub(crate) async fn login(
    Extension(conn): Extension<DatabaseConnection>,
    Json(credentials): Json<Credentials>,
) -> Result<impl IntoResponse, LoginError> {
    let Some(user) = user::Query::find_by_username(&conn, &credentials.username).await? else {
        tracing::debug!("login for unknown user");
        return Err(LoginError::InvalidCredentials);
    };
    if !verify_password(&credentials.password, &user.password_hash)
        .inspect_err(|error| tracing::error!(error = error as &dyn Error, user = %user.id, "unreadable password hash"))?
    {
        tracing::debug!(user = %user.id, "wrong password");
        return Err(LoginError::InvalidCredentials);
    }

    let token = access_tokens::Mutation::create_access_token(&conn, user.id).await?;
    Ok(Json(Token {
        access_token: token.access_token,
    }))
}

#[utoipa::path(
    post,
    path = "/logout",
    responses(
        (status = NO_CONTENT, description = "User Logged out successfully"),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to delete access token")
    ),
    tag = "auth",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn logout(
    ExtractUserId(user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
) -> impl IntoResponse {
    if let Err(error) = access_tokens::Mutation::delete_access_token(&conn, user_id).await {
        tracing::error!(
            user = %user_id,
            error = &error as &dyn Error,
            "failed to delete access token"
        );
        return StatusCode::INTERNAL_SERVER_ERROR;
    }
    tracing::debug!(user = %user_id, "user logged out");
    StatusCode::NO_CONTENT
}
