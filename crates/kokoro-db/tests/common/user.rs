use kokoro_db::user;
use kokoro_entity::user::Model as UserModel;
use sea_orm::DatabaseConnection;

#[allow(dead_code)]
pub async fn create_test_user(db: &DatabaseConnection, username: &str) -> UserModel {
    user::Mutation::create_user(
        db,
        username.to_owned(),
        format!("{username}@example.com"),
        "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_owned(),
    )
    .await
    .unwrap()
}
