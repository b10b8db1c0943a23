use crate::mood::MoodPipeline;
use kokoro_db::journal::journal_entry;
use kokoro_entity::journal::journal_entry::Model as JournalEntryModel;
use kokoro_model_tools::convert::IntoDbModel;
use sea_orm::{ConnectionTrait, DbErr};
use serde_json::Value;
use uuid::Uuid;

/// Classifies `content` and stores it as a new entry of the user.
pub async fn create_entry<C: ConnectionTrait>(
    conn: &C,
    pipeline: &MoodPipeline,
    user_id: Uuid,
    content: String,
) -> Result<JournalEntryModel, DbErr> {
    let record = pipeline.classify(&content).await;
    let typed_mood = record.typed_mood.clone();
    let mood_scores: Value = record.into_db_model();
    journal_entry::Mutation::create_journal_entry(conn, user_id, content, mood_scores, typed_mood).await
}

/// Replaces the content of an owned entry and recomputes its whole classification.
pub async fn update_entry<C: ConnectionTrait>(
    conn: &C,
    pipeline: &MoodPipeline,
    user_id: Uuid,
    entry_id: Uuid,
    content: String,
) -> Result<JournalEntryModel, DbErr> {
    let record = pipeline.classify(&content).await;
    let typed_mood = record.typed_mood.clone();
    let mood_scores: Value = record.into_db_model();
    journal_entry::Mutation::update_user_journal_entry(conn, user_id, entry_id, content, mood_scores, typed_mood)
        .await
}
