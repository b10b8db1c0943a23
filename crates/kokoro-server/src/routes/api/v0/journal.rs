pub(crate) mod error;
pub(crate) mod journal_entry;

use crate::AppConfig;
use crate::routes::api::v0::journal::error::{JournalError, JournalErrorType};
use crate::routes::error::ErrorData;
use crate::user::{ExtractUser, ExtractUserId};
use axum::Extension;
use axum::Json;
use axum::extract::Query;
use axum::response::IntoResponse;
use axum::routing::{Router, get, post};
use chrono::Utc;
use http::StatusCode;
use kokoro_core::{chart, journal::create_entry, premium};
use kokoro_db::journal;
use kokoro_model::chart::ChartSeries;
use kokoro_model::journal::JournalEntry;
use kokoro_model::journal::partial::{ChartQuery, NewJournalEntry};
use kokoro_model::mood::MoodScoreRecord;
use kokoro_model_tools::convert::FromDbModel;
use sea_orm::DatabaseConnection;

/// Entries shown on the dashboard.
const DASHBOARD_ENTRIES: u64 = 5;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .nest(
            "/entries",
            Router::new()
                .route("/", get(get_journal_entries).post(create_journal_entry))
                .nest("/{journal_entry}", journal_entry::create_router()),
        )
        .route("/dashboard", get(get_dashboard))
        .route("/chart", get(get_chart))
        .route("/analyze", post(analyze))
        .with_state(())
}

fn to_models(entries: Vec<kokoro_entity::journal::journal_entry::Model>) -> Vec<JournalEntry> {
    entries.into_iter().map(FromDbModel::from_db_model).collect()
}

#[utoipa::path(
    get,
    path = "/api/v0/journal/dashboard",
    responses(
        (status = OK, description = "Latest journal entries", body = [JournalEntry]),
    ),
    tag = "v0/journal",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn get_dashboard(
    ExtractUserId(user): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, JournalError> {
    let entries =
        journal::journal_entry::Query::get_latest_user_journal_entries(&conn, user, DASHBOARD_ENTRIES).await?;
    Ok(Json(to_models(entries)))
}

#[utoipa::path(
    get,
    path = "/api/v0/journal/entries",
    responses(
        (status = OK, description = "List journal entries, newest first", body = [JournalEntry]),
        (status = PAYMENT_REQUIRED, description = "Free tier limit reached", body = ErrorData<JournalErrorType>),
    ),
    tag = "v0/journal",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn get_journal_entries(
    ExtractUser(user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, JournalError> {
    premium::check_free_tier(&conn, &user, Utc::now().fixed_offset()).await?;
    let entries = journal::journal_entry::Query::get_user_journal_entries(&conn, user.id).await?;
    Ok(Json(to_models(entries)))
}

#[utoipa::path(
    post,
    path = "/api/v0/journal/entries",
    request_body = NewJournalEntry,
    responses(
        (status = CREATED, description = "Create and classify a journal entry", body = JournalEntry),
        (status = PAYMENT_REQUIRED, description = "Free tier limit reached", body = ErrorData<JournalErrorType>),
    ),
    tag = "v0/journal",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn create_journal_entry(
    ExtractUser(user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Extension(app_config): Extension<AppConfig>,
    Json(json): Json<NewJournalEntry>,
) -> Result<impl IntoResponse, JournalError> {
    premium::check_free_tier(&conn, &user, Utc::now().fixed_offset()).await?;
    let entry = create_entry(&conn, app_config.pipeline(), user.id, json.content).await?;
    tracing::debug!(user = %user.id, entry = %entry.id, "journal entry created");
    Ok((StatusCode::CREATED, Json(JournalEntry::from_db_model(entry))))
}

#[utoipa::path(
    get,
    path = "/api/v0/journal/chart",
    params(ChartQuery),
    responses(
        (status = OK, description = "Chart series over the requested window", body = ChartSeries),
        (status = PAYMENT_REQUIRED, description = "Free tier limit reached", body = ErrorData<JournalErrorType>),
    ),
    tag = "v0/journal",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn get_chart(
    ExtractUser(user): ExtractUser,
    Extension(conn): Extension<DatabaseConnection>,
    Query(query): Query<ChartQuery>,
) -> Result<impl IntoResponse, JournalError> {
    let now = Utc::now().fixed_offset();
    premium::check_free_tier(&conn, &user, now).await?;
    let series = chart::load_chart(&conn, user.id, &query, now).await?;
    Ok(Json(series))
}

#[utoipa::path(
    post,
    path = "/api/v0/journal/analyze",
    request_body = NewJournalEntry,
    responses(
        (status = OK, description = "Mood scores of the text, nothing is stored", body = MoodScoreRecord),
    ),
    tag = "v0/journal",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn analyze(
    ExtractUserId(_user): ExtractUserId,
    Extension(app_config): Extension<AppConfig>,
    Json(json): Json<NewJournalEntry>,
) -> impl IntoResponse {
    Json(app_config.pipeline().classify(&json.content).await)
}
