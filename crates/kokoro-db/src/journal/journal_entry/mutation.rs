use crate::util::RequireRecord;
use chrono::Utc;
use kokoro_entity::journal::journal_entry::{self, ActiveModel, Entity as JournalEntry, Model as JournalEntryModel};
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JsonValue, QueryFilter};
use std::error::Error;
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    pub async fn create_journal_entry<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        content: String,
        mood_scores: JsonValue,
        typed_mood: Option<String>,
    ) -> Result<JournalEntryModel, DbErr> {
        let journal_entry = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            content: Set(content),
            mood_scores: Set(mood_scores),
            typed_mood: Set(typed_mood),
            created_at: Set(Utc::now().fixed_offset()),
        };

        journal_entry
            .insert(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to create journal entry"))
    }

    /// Replaces the text of an entry together with its recomputed classification.
    /// `created_at` is kept.
    pub async fn update_user_journal_entry<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        journal_entry_id: Uuid,
        content: String,
        mood_scores: JsonValue,
        typed_mood: Option<String>,
    ) -> Result<JournalEntryModel, DbErr> {
        let journal_entry = ActiveModel {
            id: NotSet,
            user_id: Unchanged(user_id),
            content: Set(content),
            mood_scores: Set(mood_scores),
            typed_mood: Set(typed_mood),
            created_at: NotSet,
        };

        let res = JournalEntry::update_many()
            .set(journal_entry)
            .filter(journal_entry::Column::UserId.eq(user_id))
            .filter(journal_entry::Column::Id.eq(journal_entry_id))
            .exec(conn)
            .await?;
        if res.rows_affected == 0 {
            return Err(DbErr::RecordNotFound("Journal entry not found".to_string()));
        }

        JournalEntry::find_by_id(journal_entry_id)
            .one(conn)
            .await
            .require("journal entry")
    }

    pub async fn delete_user_journal_entry<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        journal_entry_id: Uuid,
    ) -> Result<(), DbErr> {
        let res = JournalEntry::delete_many()
            .filter(journal_entry::Column::UserId.eq(user_id))
            .filter(journal_entry::Column::Id.eq(journal_entry_id))
            .exec(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to delete journal entry"))?;
        if res.rows_affected == 0 {
            return Err(DbErr::RecordNotFound("Journal entry not found".to_string()));
        }
        Ok(())
    }
}
