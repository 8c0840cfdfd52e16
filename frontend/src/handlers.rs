use axum::{
    extract::State,
    http::header::CONTENT_TYPE,
    response::{Html, IntoResponse, Response},
};
use tracing::{error, info, instrument};

use crate::error::{PageError, ProxyError};
use crate::server::AppState;

pub const INDEX_TEMPLATE: &str = "index.html";

/// `GET /`. The template is re-read on every request.
#[instrument(skip(state))]
pub async fn index_handler(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let path = state.templates_dir.join(INDEX_TEMPLATE);

    match tokio::fs::read_to_string(&path).await {
        Ok(page) => Ok(Html(page)),
        Err(source) => {
            let path = path.display().to_string();
            error!(path = %path, error = %source, "Could not read template");
            Err(PageError::Template { path, source })
        }
    }
}

/// `GET /data`. Relays the backend body verbatim, or `502` if the upstream call fails.
#[instrument(skip(state))]
pub async fn data_handler(State(state): State<AppState>) -> Result<Response, ProxyError> {
    let (body, data) = state.client.fetch_data().await.map_err(|e| {
        error!(error = %e, "Could not fetch data from backend");
        e
    })?;

    info!(data = %data, "Retrieved data from API");

    Ok(([(CONTENT_TYPE, "application/json")], body).into_response())
}
