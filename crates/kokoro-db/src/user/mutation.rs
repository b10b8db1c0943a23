use chrono::{DateTime, FixedOffset, Utc};
use kokoro_entity::user::{ActiveModel, Model};
use sea_orm::ActiveValue::{Set, Unchanged};
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr};
use std::error::Error;
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    pub async fn create_user<C: ConnectionTrait>(
        conn: &C,
        username: String,
        email: String,
        password_hash: String,
    ) -> Result<Model, DbErr> {
        let new_user = ActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(username),
            email: Set(email),
            password_hash: Set(password_hash),
            is_premium: Set(false),
            premium_expiry: Set(None),
            created_at: Set(Utc::now().fixed_offset()),
        };

        new_user.insert(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "failed to create user");
        })
    }

    /// Marks the user premium until `expiry`.
    pub async fn set_premium<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        expiry: DateTime<FixedOffset>,
    ) -> Result<Model, DbErr> {
        let user = ActiveModel {
            id: Unchanged(user_id),
            is_premium: Set(true),
            premium_expiry: Set(Some(expiry)),
            ..Default::default()
        };
        user.update(conn).await
    }

    pub async fn clear_premium<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> Result<Model, DbErr> {
        let user = ActiveModel {
            id: Unchanged(user_id),
            is_premium: Set(false),
            premium_expiry: Set(None),
            ..Default::default()
        };
        user.update(conn).await
    }
}
