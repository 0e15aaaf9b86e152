//! Integration tests for [`session_store::SqliteSessionStore`] on a temp database file.

use quiz_core::{Platform, SessionKey};
use session_store::{SessionStore, SqliteSessionStore};
use tempfile::TempDir;

fn db_url(dir: &TempDir) -> String {
    format!("{}/data/sessions.db", dir.path().display())
}

/// **Test: set / get / clear round trip, overwrite keeps one row.**
#[tokio::test]
async fn test_set_get_clear() {
    let dir = TempDir::new().unwrap();
    let store = SqliteSessionStore::new(&db_url(&dir)).await.unwrap();
    let key = SessionKey::new(Platform::Telegram, 42);

    assert_eq!(store.get(&key).await.unwrap(), None);

    store.set(&key, "Столица Франции?").await.unwrap();
    assert_eq!(
        store.get(&key).await.unwrap().as_deref(),
        Some("Столица Франции?")
    );

    store.set(&key, "Самое глубокое озеро?").await.unwrap();
    assert_eq!(
        store.get(&key).await.unwrap().as_deref(),
        Some("Самое глубокое озеро?")
    );
    assert_eq!(store.count().await.unwrap(), 1);

    store.clear(&key).await.unwrap();
    assert_eq!(store.get(&key).await.unwrap(), None);
    // Clearing again is a no-op.
    store.clear(&key).await.unwrap();
}

/// **Test: Sessions survive reopening the database (process restart).**
///
/// **Setup:** Store a pending question, drop the store.
/// **Action:** Open a new store on the same file.
/// **Expected:** The pending question is still there.
#[tokio::test]
async fn test_session_survives_restart() {
    let dir = TempDir::new().unwrap();
    let url = db_url(&dir);
    let key = SessionKey::new(Platform::Vk, 7);

    {
        let store = SqliteSessionStore::new(&url).await.unwrap();
        store.set(&key, "Кто?").await.unwrap();
    }

    let reopened = SqliteSessionStore::new(&format!("file:{}", url)).await.unwrap();
    assert_eq!(reopened.get(&key).await.unwrap().as_deref(), Some("Кто?"));
}

/// **Test: The same numeric id on different platforms maps to different sessions.**
#[tokio::test]
async fn test_platforms_do_not_collide() {
    let dir = TempDir::new().unwrap();
    let store = SqliteSessionStore::new(&db_url(&dir)).await.unwrap();
    let tg = SessionKey::new(Platform::Telegram, 100);
    let vk = SessionKey::new(Platform::Vk, 100);

    store.set(&tg, "tg question").await.unwrap();
    store.set(&vk, "vk question").await.unwrap();
    store.clear(&tg).await.unwrap();

    assert_eq!(store.get(&tg).await.unwrap(), None);
    assert_eq!(store.get(&vk).await.unwrap().as_deref(), Some("vk question"));
}
