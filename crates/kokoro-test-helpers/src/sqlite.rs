use crate::TestDb;
use std::borrow::Cow;
use std::path::Path;
use tempfile::TempDir;
use thiserror::Error;

/// File-backed SQLite database in a temporary directory, removed on drop.
pub struct SqliteDb {
    temp_dir: TempDir,
    uri: String,
}

#[derive(Error, Debug)]
pub enum SqliteError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SqliteDb {
    pub fn new() -> Result<Self, SqliteError> {
        let temp_dir = TempDir::with_prefix("kokoro-sqlite-db")?;
        let path = temp_dir
            .path()
            .join("kokoro.sqlite")
            .to_str()
            .ok_or(std::io::Error::new(std::io::ErrorKind::InvalidData, "Invalid path"))?
            .to_owned();
        let uri = format!("sqlite://{path}?mode=rwc");

        tracing::info!(uri = ?uri, "return sqlite db uri");
        Ok(Self { temp_dir, uri })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }
}

impl TestDb for SqliteDb {
    fn db_uri(&self) -> Cow<'_, str> {
        self.uri.as_str().into()
    }
}
