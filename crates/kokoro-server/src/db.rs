pub(crate) mod error;

use crate::db::error::DbError;
use kokoro_db::schema::setup_schema;
use kokoro_utils::args::db::DbArgs;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::error::Error;

/// Backend named by the scheme of a database url.
pub(crate) fn db_type(url: &str) -> Result<&str, DbError> {
    let scheme = url.split_once(':').map(|(scheme, _)| scheme).unwrap_or_default();
    match scheme.split('+').next() {
        Some(db_type @ ("sqlite" | "postgres" | "postgresql")) => Ok(db_type),
        _ => Err(DbError::UnsupportedUrl(scheme.to_owned())),
    }
}

fn build_connect_options(db_options: &DbArgs) -> ConnectOptions {
    let mut seaorm_pool_options = ConnectOptions::new(db_options.database_url.clone());
    if let Some(min_connections) = db_options.db_min_connections {
        seaorm_pool_options.min_connections(min_connections);
    }
    if let Some(max_connections) = db_options.db_max_connections {
        seaorm_pool_options.max_connections(max_connections);
    }
    seaorm_pool_options.sqlx_logging_level(log::LevelFilter::Debug);
    seaorm_pool_options
}

pub(crate) async fn connect(db_options: &DbArgs) -> Result<DatabaseConnection, DbError> {
    let db_type = db_type(&db_options.database_url)?;
    tracing::debug!(db_type, "connecting to database");
    let conn = Database::connect(build_connect_options(db_options)).await?;

    if db_options.init_schema {
        tracing::info!("creating missing tables");
        setup_schema(&conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to create schema"))?;
    }
    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_db_type() {
        assert_eq!(db_type("sqlite://kokoro.sqlite?mode=rwc").unwrap(), "sqlite");
        assert_eq!(db_type("sqlite::memory:").unwrap(), "sqlite");
        assert_eq!(db_type("postgres://kokoro@localhost/kokoro").unwrap(), "postgres");
        assert!(matches!(db_type("mysql://localhost/kokoro"), Err(DbError::UnsupportedUrl(scheme)) if scheme == "mysql"));
        assert!(db_type("kokoro.sqlite").is_err());
    }

    #[test(tokio::test)]
    async fn test_connect_with_schema() {
        let args = DbArgs {
            database_url: kokoro_test_helpers::SQLITE_MEMORY_URI.to_owned(),
            db_min_connections: None,
            db_max_connections: Some(1),
            init_schema: true,
        };
        let conn = connect(&args).await.unwrap();
        let users = kokoro_db::user::Query::find_by_username(&conn, "nobody").await.unwrap();
        assert!(users.is_none());
    }
}
