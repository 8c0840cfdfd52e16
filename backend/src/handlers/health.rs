use axum::{extract::State, Json};
use tracing::{info, instrument};

use crate::envelope::{DbStatus, HealthStatus};
use crate::state::{AppState, StorageMode};

/// `status` is always `OK`; `db_status` is `UP` only for a connected store that answers a ping.
pub async fn handle_health_request(storage: &StorageMode) -> HealthStatus {
    let db_status = match storage {
        StorageMode::Connected(store) => {
            if store.ping().await {
                DbStatus::Up
            } else {
                DbStatus::Down
            }
        }
        StorageMode::Mock => DbStatus::Down,
    };
    HealthStatus::now(db_status)
}

/// `GET /health`. Always `200 OK`.
#[instrument(skip(state))]
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthStatus> {
    info!("Received request to /health");
    Json(handle_health_request(&state.storage).await)
}
