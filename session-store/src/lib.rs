//! Session store crate: which question each user is currently answering.
//!
//! ## Modules
//!
//! - [`error`] – Store error types
//! - [`store`] – SessionStore trait
//! - [`sqlite_store`] – SqliteSessionStore (durable)
//! - [`inmemory_store`] – InMemorySessionStore (tests, local runs)
//! - [`sqlite_pool`] – SqlitePoolManager

mod error;
mod inmemory_store;
mod sqlite_pool;
mod sqlite_store;
mod store;

pub use error::StoreError;
pub use inmemory_store::InMemorySessionStore;
pub use sqlite_pool::SqlitePoolManager;
pub use sqlite_store::SqliteSessionStore;
pub use store::SessionStore;
