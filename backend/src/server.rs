use std::future::Future;
use std::net::SocketAddr;

use axum::{routing::get, Router};
use service_core::{open_cors, shutdown_signal};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, instrument};

use crate::config::BackendConfig;
use crate::error::BackendError;
use crate::handlers::{data_handler, health_handler};
use crate::startup::init_storage;
use crate::state::{AppState, StorageMode};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/data", get(data_handler))
        .route("/health", get(health_handler))
        .layer(open_cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Main entry: decide storage mode, bind, serve until a shutdown signal, close the pool.
#[instrument(skip(config))]
pub async fn run(config: BackendConfig) -> Result<(), BackendError> {
    let storage = init_storage(config.database.as_ref()).await?;
    info!(mode = ?storage, "Storage initialized");

    let address = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(address)
        .await
        .map_err(|source| BackendError::Bind { address, source })?;
    info!(%address, "Backend API service starting");

    serve(listener, storage, shutdown_signal()).await?;
    info!("Backend API service stopped");
    Ok(())
}

/// Serves on `listener` until `shutdown` resolves. The pool is closed whether serving
/// ended cleanly or with an error.
pub async fn serve<F>(
    listener: TcpListener,
    storage: StorageMode,
    shutdown: F,
) -> Result<(), BackendError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let served = axum::serve(listener, router(AppState::new(storage.clone())))
        .with_graceful_shutdown(shutdown)
        .await;

    storage.close().await;
    served.map_err(BackendError::Serve)
}
