//! # Session Store
//!
//! A session is the text of the question currently posed to one user, keyed by [`SessionKey`].
//! No entry means no question is pending.
//!
//! Implementations must make each call atomic per key and read-your-writes for a single key;
//! callers never cache the value between events.

use async_trait::async_trait;
use quiz_core::SessionKey;

use crate::error::StoreError;

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Pending question for `key`, if any.
    async fn get(&self, key: &SessionKey) -> Result<Option<String>, StoreError>;

    /// Sets (or overwrites) the pending question for `key`.
    async fn set(&self, key: &SessionKey, question: &str) -> Result<(), StoreError>;

    /// Removes the pending question for `key`. Clearing an absent session is not an error.
    async fn clear(&self, key: &SessionKey) -> Result<(), StoreError>;
}
