//! Durable session store on SQLite.
//!
//! One row per session key in `quiz_sessions`; `set` is a single upsert and `clear` a single
//! delete, so every operation is atomic per key. State survives process restarts and can be
//! shared by several bot processes pointing at the same file.

use async_trait::async_trait;
use chrono::Utc;
use quiz_core::SessionKey;
use tracing::{debug, info};

use crate::error::StoreError;
use crate::sqlite_pool::SqlitePoolManager;
use crate::store::SessionStore;

#[derive(Clone)]
pub struct SqliteSessionStore {
    pool_manager: SqlitePoolManager,
}

impl SqliteSessionStore {
    pub async fn new(database_url: &str) -> Result<Self, StoreError> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        let store = Self { pool_manager };
        store.init().await?;
        Ok(store)
    }

    async fn init(&self) -> Result<(), sqlx::Error> {
        info!("Creating session table if not exist");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS quiz_sessions (
                session_key TEXT PRIMARY KEY,
                question TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(self.pool_manager.pool())
        .await?;

        Ok(())
    }

    /// Number of sessions with a pending question.
    pub async fn count(&self) -> Result<i64, StoreError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM quiz_sessions")
            .fetch_one(self.pool_manager.pool())
            .await?;
        Ok(count.0)
    }
}

#[async_trait]
impl SessionStore for SqliteSessionStore {
    async fn get(&self, key: &SessionKey) -> Result<Option<String>, StoreError> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT question FROM quiz_sessions WHERE session_key = ?")
                .bind(key.to_string())
                .fetch_optional(self.pool_manager.pool())
                .await?;
        Ok(row.map(|r| r.0))
    }

    async fn set(&self, key: &SessionKey, question: &str) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO quiz_sessions (session_key, question, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(session_key) DO UPDATE SET
                question = excluded.question,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key.to_string())
        .bind(question)
        .bind(Utc::now())
        .execute(self.pool_manager.pool())
        .await?;

        debug!(session = %key, "Session question set");
        Ok(())
    }

    async fn clear(&self, key: &SessionKey) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM quiz_sessions WHERE session_key = ?")
            .bind(key.to_string())
            .execute(self.pool_manager.pool())
            .await?;

        debug!(session = %key, removed = result.rows_affected(), "Session cleared");
        Ok(())
    }
}
