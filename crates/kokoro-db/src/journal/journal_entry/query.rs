use chrono::{DateTime, FixedOffset};
use kokoro_entity::journal::journal_entry::{self, Entity as JournalEntry, Model as JournalEntryModel};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    QueryTrait,
};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    /// All entries of the user, newest first.
    pub async fn get_user_journal_entries<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
    ) -> Result<Vec<JournalEntryModel>, DbErr> {
        JournalEntry::find()
            .filter(journal_entry::Column::UserId.eq(user_id))
            .order_by_desc(journal_entry::Column::CreatedAt)
            .all(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to load user journal entries"))
    }

    pub async fn get_latest_user_journal_entries<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        limit: u64,
    ) -> Result<Vec<JournalEntryModel>, DbErr> {
        JournalEntry::find()
            .filter(journal_entry::Column::UserId.eq(user_id))
            .order_by_desc(journal_entry::Column::CreatedAt)
            .limit(limit)
            .all(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to load latest journal entries"))
    }

    /// Entries created at or after `since`, oldest first. Without `since` every entry
    /// of the user is returned.
    pub async fn get_user_journal_entries_since<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        since: Option<DateTime<FixedOffset>>,
    ) -> Result<Vec<JournalEntryModel>, DbErr> {
        tracing::trace!(%user_id, ?since, "loading journal entries in window");
        JournalEntry::find()
            .filter(journal_entry::Column::UserId.eq(user_id))
            .apply_if(since, |query, since| query.filter(journal_entry::Column::CreatedAt.gte(since)))
            .order_by_asc(journal_entry::Column::CreatedAt)
            .all(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to load journal window"))
    }

    pub async fn count_user_journal_entries<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> Result<u64, DbErr> {
        JournalEntry::find()
            .filter(journal_entry::Column::UserId.eq(user_id))
            .count(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to count journal entries"))
    }

    /// Looks the entry up regardless of its owner, so callers can tell a missing entry
    /// apart from one that belongs to someone else.
    pub async fn get_journal_entry<C: ConnectionTrait>(
        conn: &C,
        journal_entry_id: Uuid,
    ) -> Result<Option<JournalEntryModel>, DbErr> {
        JournalEntry::find_by_id(journal_entry_id)
            .one(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to load journal entry"))
    }

    pub async fn get_user_journal_entry<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        journal_entry_id: Uuid,
    ) -> Result<Option<JournalEntryModel>, DbErr> {
        JournalEntry::find_by_id(journal_entry_id)
            .filter(journal_entry::Column::UserId.eq(user_id))
            .one(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to load user journal entry"))
    }
}
