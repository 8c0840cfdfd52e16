use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use axum::{routing::get, Router};
use service_core::{open_cors, shutdown_signal};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, instrument};

use crate::client::BackendClient;
use crate::config::FrontendConfig;
use crate::error::ServerError;
use crate::handlers::{data_handler, index_handler};

/// Shared state handed to every handler; read-only after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub client: BackendClient,
    pub templates_dir: Arc<Path>,
}

impl AppState {
    pub fn new(client: BackendClient, templates_dir: PathBuf) -> Self {
        Self {
            client,
            templates_dir: Arc::from(templates_dir),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/data", get(data_handler))
        .layer(open_cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Main entry: validate config, build the backend client, serve until a shutdown signal.
#[instrument(skip(config))]
pub async fn run(config: FrontendConfig) -> Result<()> {
    config.validate()?;
    let data_url = config.api_data_url()?;
    let client = BackendClient::new(data_url, config.backend_timeout)?;
    info!(url = %client.data_url(), "Backend data endpoint");

    let state = AppState::new(client, config.templates_dir.clone());

    let address = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(address)
        .await
        .map_err(|source| ServerError::Bind { address, source })?;
    info!(%address, "Starting frontend server");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    info!("Frontend server stopped");
    Ok(())
}
