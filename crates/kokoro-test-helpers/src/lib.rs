mod sqlite;

pub use sqlite::*;
use std::borrow::Cow;

/// A throwaway database that lives as long as the value.
pub trait TestDb {
    fn db_uri(&self) -> Cow<'_, str>;
}

/// Connection string of a private in-memory SQLite database.
pub const SQLITE_MEMORY_URI: &str = "sqlite::memory:";
