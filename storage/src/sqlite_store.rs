//! SQLite-backed [`ItemStore`], same contract as the PostgreSQL store.

use async_trait::async_trait;
use tracing::{info, instrument, warn};

use crate::error::StorageError;
use crate::item_store::ItemStore;
use crate::models::ItemRecord;
use crate::sqlite_pool::SqlitePoolManager;

#[derive(Clone)]
pub struct SqliteItemStore {
    pool_manager: SqlitePoolManager,
}

impl SqliteItemStore {
    /// Opens (creating if missing) the database file at `database_path`.
    pub async fn open(database_path: &str) -> Result<Self, StorageError> {
        let pool_manager = SqlitePoolManager::new(database_path).await?;
        Ok(Self { pool_manager })
    }

    pub fn pool_manager(&self) -> &SqlitePoolManager {
        &self.pool_manager
    }
}

#[async_trait]
impl ItemStore for SqliteItemStore {
    async fn ensure_schema(&self) -> Result<(), StorageError> {
        info!("Creating items table if not exists");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS items (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(self.pool_manager.pool())
        .await
        .map_err(StorageError::Schema)?;

        info!("Successfully ensured items table exists");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn insert_item(&self, name: &str) -> Result<ItemRecord, StorageError> {
        let record = sqlx::query_as::<_, ItemRecord>(
            "INSERT INTO items (name) VALUES (?) RETURNING id, name, created_at",
        )
        .bind(name)
        .fetch_one(self.pool_manager.pool())
        .await
        .map_err(StorageError::Insert)?;

        info!(id = record.id, name = %record.name, "Inserted item");
        Ok(record)
    }

    async fn ping(&self) -> bool {
        match sqlx::query("SELECT 1")
            .execute(self.pool_manager.pool())
            .await
        {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "Database ping failed");
                false
            }
        }
    }

    async fn close(&self) {
        info!("Closing database connection");
        self.pool_manager.pool().close().await;
    }
}
