use axum::{extract::State, Json};
use chrono::Utc;
use tracing::{error, info, instrument};

use crate::envelope::{Envelope, MOCK_MODE_MESSAGE};
use crate::state::{AppState, StorageMode};

/// Item name for one request; nanosecond timestamp keeps concurrent requests apart.
fn sample_item_name() -> String {
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    format!("Sample Item {}", nanos)
}

/// Builds the `/api/data` envelope.
///
/// Connected: inserts exactly one row per call, so this is neither safe nor idempotent
/// and callers must not retry blindly. Insert failures are reported in-band with
/// `source=error`.
pub async fn handle_data_request(storage: &StorageMode) -> Envelope {
    match storage {
        StorageMode::Mock => {
            info!("Database not connected, returning mock data");
            Envelope {
                message: MOCK_MODE_MESSAGE.to_string(),
                ..Envelope::mock()
            }
        }
        StorageMode::Connected(store) => {
            let name = sample_item_name();
            match store.insert_item(&name).await {
                Ok(record) => Envelope::from_record(record),
                Err(e) => {
                    error!(error = %e, "Error interacting with database");
                    Envelope::storage_error(e)
                }
            }
        }
    }
}

/// `GET /api/data`. Always `200 OK`.
#[instrument(skip(state))]
pub async fn data_handler(State(state): State<AppState>) -> Json<Envelope> {
    info!("Received request to /api/data");
    Json(handle_data_request(&state.storage).await)
}
