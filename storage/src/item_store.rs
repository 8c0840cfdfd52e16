use async_trait::async_trait;

use crate::error::StorageError;
use crate::models::ItemRecord;

/// Access to the `items` table.
///
/// Implementations share one pool across all callers; every method is a single
/// round trip and nothing is retried.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Creates the `items` table if it does not exist. Safe to call on every start.
    async fn ensure_schema(&self) -> Result<(), StorageError>;

    /// Inserts one row and returns it as assigned by the engine (`INSERT .. RETURNING`).
    async fn insert_item(&self, name: &str) -> Result<ItemRecord, StorageError>;

    /// Returns `true` if a pooled connection answers `SELECT 1`. Never mutates.
    async fn ping(&self) -> bool;

    /// Closes the pool; later calls fail.
    async fn close(&self);
}
