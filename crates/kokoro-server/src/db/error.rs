use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("DB error occurred")]
    SeaOrm(#[from] sea_orm::DbErr),

    #[error("Unsupported database type {0}")]
    UnsupportedUrl(String),
}
