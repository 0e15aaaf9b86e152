//! Session store whose reads or writes can be switched to fail, for error-path tests.

use async_trait::async_trait;
use quiz_core::SessionKey;
use session_store::{InMemorySessionStore, SessionStore, StoreError};
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Default)]
pub struct FailingStore {
    pub inner: InMemorySessionStore,
    pub fail_reads: AtomicBool,
    pub fail_writes: AtomicBool,
}

impl FailingStore {
    fn check(flag: &AtomicBool) -> Result<(), StoreError> {
        if flag.load(Ordering::SeqCst) {
            Err(StoreError::Database("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl SessionStore for FailingStore {
    async fn get(&self, key: &SessionKey) -> Result<Option<String>, StoreError> {
        Self::check(&self.fail_reads)?;
        self.inner.get(key).await
    }

    async fn set(&self, key: &SessionKey, question: &str) -> Result<(), StoreError> {
        Self::check(&self.fail_writes)?;
        self.inner.set(key, question).await
    }

    async fn clear(&self, key: &SessionKey) -> Result<(), StoreError> {
        Self::check(&self.fail_writes)?;
        self.inner.clear(key).await
    }
}
