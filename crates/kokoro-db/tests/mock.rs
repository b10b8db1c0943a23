use chrono::Utc;
use kokoro_db::journal::journal_entry::Query;
use kokoro_entity::journal::journal_entry;
use sea_orm::{DatabaseBackend, DbErr, MockDatabase};
use serde_json::json;
use std::collections::BTreeMap;
use test_log::test;
use uuid::Uuid;

#[test(tokio::test)]
async fn test_get_user_journal_entries() -> Result<(), DbErr> {
    let user_id = Uuid::new_v4();
    let models = [journal_entry::Model {
        id: Uuid::new_v4(),
        user_id,
        content: "a calm day".to_owned(),
        mood_scores: json!({"labels": [], "scores": []}),
        typed_mood: None,
        created_at: Utc::now().fixed_offset(),
    }];
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([models.clone()])
        .into_connection();

    assert_eq!(Query::get_user_journal_entries(&db, user_id).await?, Vec::from(models));

    let log = db.into_transaction_log();
    assert_eq!(log.len(), 1);
    let statement = format!("{:?}", log[0]);
    assert!(statement.contains("ORDER BY"), "{statement}");
    assert!(statement.contains("DESC"), "{statement}");

    Ok(())
}

#[tokio::test]
async fn test_count_user_journal_entries() -> Result<(), DbErr> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[BTreeMap::from([("num_items", sea_orm::Value::BigInt(Some(4)))])]])
        .into_connection();

    assert_eq!(Query::count_user_journal_entries(&db, Uuid::new_v4()).await?, 4);

    Ok(())
}
