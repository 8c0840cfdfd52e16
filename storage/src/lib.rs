//! Storage crate: the `items` table and the adapters that talk to it.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – ItemRecord
//! - [`item_store`] – ItemStore trait
//! - [`pg_pool`] – ConnectionSettings, PgPoolManager
//! - [`sqlite_pool`] – SqlitePoolManager
//! - [`pg_store`] / [`sqlite_store`] – ItemStore implementations

mod error;
mod item_store;
mod models;
mod pg_pool;
mod pg_store;
mod sqlite_pool;
mod sqlite_store;

pub use error::StorageError;
pub use item_store::ItemStore;
pub use models::ItemRecord;
pub use pg_pool::{ConnectionSettings, PgPoolManager};
pub use pg_store::PgItemStore;
pub use sqlite_pool::SqlitePoolManager;
pub use sqlite_store::SqliteItemStore;
