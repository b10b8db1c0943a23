use sea_orm::{ConnectionTrait, DatabaseBackend, DbErr};
use std::error::Error;

const SQLITE_SCHEMA: &str = include_str!("schema/sqlite.sql");
const POSTGRES_SCHEMA: &str = include_str!("schema/postgres.sql");

/// Creates the tables if they do not exist yet. Statements are idempotent.
pub async fn setup_schema<C: ConnectionTrait>(conn: &C) -> Result<(), DbErr> {
    let schema = match conn.get_database_backend() {
        DatabaseBackend::Sqlite => SQLITE_SCHEMA,
        DatabaseBackend::Postgres => POSTGRES_SCHEMA,
        DatabaseBackend::MySql => return Err(DbErr::Custom("MySQL is not supported".to_owned())),
    };

    tracing::debug!(backend = ?conn.get_database_backend(), "creating schema");
    conn.execute_unprepared(schema)
        .await
        .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to create schema"))?;
    Ok(())
}
