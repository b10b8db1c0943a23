use crate::AppConfig;
use crate::routes::api::v0::journal::error::{ENTRIES_LOCATION, JournalError};
use crate::user::ExtractUserId;
use axum::Extension;
use axum::extract::Path;
use axum::response::{IntoResponse, Json, Redirect};
use axum::routing::{Router, get};
use kokoro_core::journal::update_entry;
use kokoro_db::journal;
use kokoro_entity::journal::journal_entry::Model as JournalEntryModel;
use kokoro_model::journal::JournalEntry;
use kokoro_model::journal::partial::NewJournalEntry;
use kokoro_model_tools::convert::FromDbModel;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/",
            get(get_journal_entry).put(update_journal_entry).delete(delete_journal_entry),
        )
        .with_state(())
}

/// Loads an entry by id. Absent entries are 404, foreign ones a redirect.
async fn load_owned(conn: &DatabaseConnection, user: Uuid, id: Uuid) -> Result<JournalEntryModel, JournalError> {
    if let Some(entry) = journal::journal_entry::Query::get_user_journal_entry(conn, user, id).await? {
        return Ok(entry);
    }
    if journal::journal_entry::Query::get_journal_entry(conn, id).await?.is_none() {
        return Err(JournalError::NotFound);
    }
    tracing::warn!(%user, entry = %id, "access to foreign journal entry");
    Err(JournalError::NotOwner)
}

#[utoipa::path(
    get,
    path = "/api/v0/journal/entries/{journal_entry}",
    params(("journal_entry" = Uuid, Path, description = "Journal entry id")),
    responses(
        (status = OK, description = "Journal entry", body = JournalEntry),
        (status = SEE_OTHER, description = "Entry belongs to another user"),
        (status = NOT_FOUND, description = "Entry does not exist"),
    ),
    tag = "v0/journal",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn get_journal_entry(
    ExtractUserId(user): ExtractUserId,
    Path(journal_entry): Path<Uuid>,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, JournalError> {
    let entry = load_owned(&conn, user, journal_entry).await?;
    Ok(Json(JournalEntry::from_db_model(entry)))
}

#[utoipa::path(
    put,
    path = "/api/v0/journal/entries/{journal_entry}",
    params(("journal_entry" = Uuid, Path, description = "Journal entry id")),
    request_body = NewJournalEntry,
    responses(
        (status = OK, description = "Updated and reclassified journal entry", body = JournalEntry),
        (status = SEE_OTHER, description = "Entry belongs to another user"),
        (status = NOT_FOUND, description = "Entry does not exist"),
    ),
    tag = "v0/journal",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn update_journal_entry(
    ExtractUserId(user): ExtractUserId,
    Path(journal_entry): Path<Uuid>,
    Extension(conn): Extension<DatabaseConnection>,
    Extension(app_config): Extension<AppConfig>,
    Json(json): Json<NewJournalEntry>,
) -> Result<impl IntoResponse, JournalError> {
    load_owned(&conn, user, journal_entry).await?;
    let entry = update_entry(&conn, app_config.pipeline(), user, journal_entry, json.content).await?;
    tracing::debug!(%user, entry = %journal_entry, "journal entry updated");
    Ok(Json(JournalEntry::from_db_model(entry)))
}

#[utoipa::path(
    delete,
    path = "/api/v0/journal/entries/{journal_entry}",
    params(("journal_entry" = Uuid, Path, description = "Journal entry id")),
    responses(
        (status = SEE_OTHER, description = "Redirects to the entry list, the entry is deleted if owned"),
        (status = NOT_FOUND, description = "Entry does not exist"),
    ),
    tag = "v0/journal",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn delete_journal_entry(
    ExtractUserId(user): ExtractUserId,
    Path(journal_entry): Path<Uuid>,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<impl IntoResponse, JournalError> {
    match load_owned(&conn, user, journal_entry).await {
        Ok(_) => {
            journal::journal_entry::Mutation::delete_user_journal_entry(&conn, user, journal_entry).await?;
            tracing::debug!(%user, entry = %journal_entry, "journal entry deleted");
        }
        Err(JournalError::NotOwner) => {}
        Err(error) => return Err(error),
    }
    Ok(Redirect::to(ENTRIES_LOCATION))
}
