//! SQLite connection pool wrapper.

use sqlx::{sqlite::SqliteConnectOptions, SqlitePool};
use tracing::info;

use crate::error::StorageError;

/// Manages a single SQLite pool; creates the DB file if missing.
#[derive(Clone)]
pub struct SqlitePoolManager {
    pool: SqlitePool,
}

impl SqlitePoolManager {
    /// Creates a pool for the given database file path.
    pub async fn new(database_path: &str) -> Result<Self, StorageError> {
        info!(database_path, "Initializing SQLite pool");

        let options = SqliteConnectOptions::new()
            .create_if_missing(true)
            .filename(database_path);

        let pool = SqlitePool::connect_with(options)
            .await
            .map_err(StorageError::Connect)?;

        Ok(Self { pool })
    }

    /// Returns the underlying pool for running queries.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
