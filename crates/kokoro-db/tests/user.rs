mod common;

use crate::common::setup_db;
use crate::common::user::create_test_user;
use chrono::{Duration, Utc};
use kokoro_db::{access_tokens, schema, user};
use kokoro_test_helpers::{SqliteDb, TestDb};
use sea_orm::{Database, DbErr};
use test_log::test;

#[test(tokio::test)]
async fn test_create_and_find_user() {
    let db = &setup_db().await;
    let created = create_test_user(db, "ada").await;

    let by_id = user::Query::find_user_by_id(db, created.id).await.unwrap().unwrap();
    assert_eq!(by_id, created);
    assert!(!by_id.is_premium);
    assert_eq!(by_id.premium_expiry, None);

    let by_name = user::Query::find_by_username(db, "ada").await.unwrap().unwrap();
    assert_eq!(by_name.id, created.id);
    let by_email = user::Query::find_by_email(db, "ada@example.com").await.unwrap().unwrap();
    assert_eq!(by_email.id, created.id);

    assert!(user::Query::find_by_username(db, "grace").await.unwrap().is_none());
}

#[test(tokio::test)]
async fn test_duplicate_username_rejected() {
    let db = &setup_db().await;
    create_test_user(db, "ada").await;

    let res = user::Mutation::create_user(db, "ada".to_owned(), "other@example.com".to_owned(), "x".to_owned()).await;
    assert!(res.is_err());
}

#[test(tokio::test)]
async fn test_set_and_clear_premium() {
    let db = &setup_db().await;
    let created = create_test_user(db, "ada").await;
    let expiry = (Utc::now() + Duration::days(30)).fixed_offset();

    let updated = user::Mutation::set_premium(db, created.id, expiry).await.unwrap();
    assert!(updated.is_premium);
    assert_eq!(updated.premium_expiry, Some(expiry));
    assert!(updated.is_premium_active(Utc::now().fixed_offset()));

    let cleared = user::Mutation::clear_premium(db, created.id).await.unwrap();
    assert!(!cleared.is_premium);
    assert_eq!(cleared.premium_expiry, None);
    assert_eq!(cleared.username, "ada");
}

#[test(tokio::test)]
async fn test_access_token_lifecycle() {
    let db = &setup_db().await;
    let created = create_test_user(db, "ada").await;

    let token = access_tokens::Mutation::create_access_token(db, created.id).await.unwrap();
    let again = access_tokens::Mutation::create_access_token(db, created.id).await.unwrap();
    assert_eq!(token.access_token, again.access_token, "a user keeps a single session token");

    let found = user::Query::find_by_token(db, &token.access_token).await.unwrap().unwrap();
    assert_eq!(found.id, created.id);
    assert!(user::Query::find_by_token(db, "not-a-token").await.unwrap().is_none());

    access_tokens::Mutation::delete_access_token(db, created.id).await.unwrap();
    assert!(user::Query::find_by_token(db, &token.access_token).await.unwrap().is_none());
}

#[test(tokio::test)]
async fn test_schema_on_file_db_is_idempotent() -> Result<(), DbErr> {
    let sqlite = SqliteDb::new().unwrap();
    let db = Database::connect(sqlite.db_uri().as_ref()).await?;
    for _ in 0..2 {
        schema::setup_schema(&db).await?;
    }
    create_test_user(&db, "ada").await;
    assert!(user::Query::find_by_username(&db, "ada").await?.is_some());
    Ok(())
}
