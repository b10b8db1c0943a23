pub mod user;

use kokoro_db::schema;
use kokoro_test_helpers::SQLITE_MEMORY_URI;
use sea_orm::{Database, DatabaseConnection};

pub async fn setup_db() -> DatabaseConnection {
    let db = Database::connect(SQLITE_MEMORY_URI).await.unwrap();
    schema::setup_schema(&db).await.unwrap();
    db
}
