//! # In-Memory Session Store
//!
//! Process-local [`SessionStore`] for tests and local development. State is lost on restart,
//! so production runs use [`crate::SqliteSessionStore`].

use async_trait::async_trait;
use quiz_core::SessionKey;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::store::SessionStore;

#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionKey, String>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, key: &SessionKey) -> Result<Option<String>, StoreError> {
        Ok(self.sessions.read().await.get(key).cloned())
    }

    async fn set(&self, key: &SessionKey, question: &str) -> Result<(), StoreError> {
        self.sessions
            .write()
            .await
            .insert(*key, question.to_string());
        Ok(())
    }

    async fn clear(&self, key: &SessionKey) -> Result<(), StoreError> {
        self.sessions.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::Platform;

    #[tokio::test]
    async fn test_set_get_clear() {
        let store = InMemorySessionStore::new();
        let key = SessionKey::new(Platform::Telegram, 1);

        assert_eq!(store.get(&key).await.unwrap(), None);
        store.set(&key, "Q1").await.unwrap();
        store.set(&key, "Q2").await.unwrap();
        assert_eq!(store.get(&key).await.unwrap().as_deref(), Some("Q2"));
        assert_eq!(store.len().await, 1);

        store.clear(&key).await.unwrap();
        store.clear(&key).await.unwrap();
        assert!(store.is_empty().await);
    }
}
