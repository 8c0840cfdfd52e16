//! Decides the [`StorageMode`] at process start.
//!
//! Connection problems downgrade to mock mode; a rejected schema statement is fatal.

use std::sync::Arc;

use storage::{ConnectionSettings, ItemStore, PgItemStore};
use tracing::{error, info, warn};

use crate::error::BackendError;
use crate::state::StorageMode;

/// Connects to PostgreSQL when settings are present, then [`activate_store`]s it.
pub async fn init_storage(
    settings: Option<&ConnectionSettings>,
) -> Result<StorageMode, BackendError> {
    let Some(settings) = settings else {
        info!("DB_HOST environment variable not set. Running backend service in mock data mode");
        return Ok(StorageMode::Mock);
    };

    info!(connection = %settings, "Attempting to connect to database");

    match PgItemStore::connect(settings).await {
        Ok(store) => activate_store(Arc::new(store)).await,
        Err(e) => {
            warn!(error = %e, "Failed to open database connection. Running without DB");
            Ok(StorageMode::Mock)
        }
    }
}

/// Pings `store` and ensures the schema.
///
/// Unreachable store: closed, mock mode. Schema failure: [`BackendError::Schema`].
pub async fn activate_store(store: Arc<dyn ItemStore>) -> Result<StorageMode, BackendError> {
    if !store.ping().await {
        warn!("Failed to ping database. Running without DB");
        store.close().await;
        return Ok(StorageMode::Mock);
    }

    info!("Successfully connected to the database");

    if let Err(e) = store.ensure_schema().await {
        error!(error = %e, "Failed to create items table");
        store.close().await;
        return Err(BackendError::Schema(e));
    }

    Ok(StorageMode::Connected(store))
}
