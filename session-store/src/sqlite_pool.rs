//! SQLite connection pool wrapper for the session store.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode};
use sqlx::SqlitePool;
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Several bot processes may share one database file; writers wait this long for the lock.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Strips `sqlite://` / `sqlite:` / `file:` prefixes so URLs and bare paths both work.
pub(crate) fn database_path(database_url: &str) -> &str {
    database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))
        .or_else(|| database_url.strip_prefix("file:"))
        .unwrap_or(database_url)
}

/// Manages a single SQLite pool; creates the DB file (and its directory) if missing.
#[derive(Clone)]
pub struct SqlitePoolManager {
    pool: SqlitePool,
}

impl SqlitePoolManager {
    /// Creates a pool for the given database URL or file path.
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        let path = database_path(database_url);
        info!(path = %path, "Initializing SQLite pool");

        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let options = SqliteConnectOptions::new()
            .create_if_missing(true)
            .filename(path)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(BUSY_TIMEOUT);

        let pool = SqlitePool::connect_with(options).await?;

        Ok(Self { pool })
    }

    /// Returns the underlying pool for running queries.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_path_prefixes() {
        assert_eq!(database_path("./data/sessions.db"), "./data/sessions.db");
        assert_eq!(database_path("file:./data/sessions.db"), "./data/sessions.db");
        assert_eq!(database_path("sqlite://sessions.db"), "sessions.db");
        assert_eq!(database_path("sqlite:sessions.db"), "sessions.db");
    }
}
