//! PostgreSQL-backed [`ItemStore`].

use async_trait::async_trait;
use tracing::{info, instrument, warn};

use crate::error::StorageError;
use crate::item_store::ItemStore;
use crate::models::ItemRecord;
use crate::pg_pool::{ConnectionSettings, PgPoolManager};

#[derive(Clone)]
pub struct PgItemStore {
    pool_manager: PgPoolManager,
}

impl PgItemStore {
    /// Connects to PostgreSQL. Does not touch the schema; call [`ItemStore::ensure_schema`].
    pub async fn connect(settings: &ConnectionSettings) -> Result<Self, StorageError> {
        let pool_manager = PgPoolManager::connect(settings).await?;
        Ok(Self { pool_manager })
    }

    pub fn pool_manager(&self) -> &PgPoolManager {
        &self.pool_manager
    }
}

#[async_trait]
impl ItemStore for PgItemStore {
    async fn ensure_schema(&self) -> Result<(), StorageError> {
        info!("Creating items table if not exists");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS items (
                id BIGSERIAL PRIMARY KEY,
                name VARCHAR(100) NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(self.pool_manager.pool())
        .await
        .map_err(StorageError::Schema)?;

        info!("Successfully ensured items table exists");
        Ok(())
    }

    /// Casts in `RETURNING` keep decoding stable on tables created as `SERIAL`/`TIMESTAMP`.
    #[instrument(skip(self))]
    async fn insert_item(&self, name: &str) -> Result<ItemRecord, StorageError> {
        let record = sqlx::query_as::<_, ItemRecord>(
            "INSERT INTO items (name) VALUES ($1) \
             RETURNING id::BIGINT AS id, name, created_at::TIMESTAMPTZ AS created_at",
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
