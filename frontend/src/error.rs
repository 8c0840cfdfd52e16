//! Error types of the frontend and their HTTP mapping.

use std::net::SocketAddr;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// The single upstream call to the backend failed.
#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("Could not fetch data from {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {url} failed with status code: {status}")]
    Status { url: String, status: u16 },

    #[error("Could not read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Could not decode response body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ProxyError {
    pub fn url(&self) -> &str {
        match self {
            Self::Request { url, .. }
            | Self::Status { url, .. }
            | Self::Body { url, .. }
            | Self::Decode { url, .. } => url,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_GATEWAY,
            format!("Bad Gateway: could not fetch data from API: {}", self.url()),
        )
            .into_response()
    }
}

/// The page template could not be loaded.
#[derive(Error, Debug)]
pub enum PageError {
    #[error("Could not read template {path}: {source}")]
    Template {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error: could not parse template.",
        )
            .into_response()
    }
}

/// Fatal errors of the frontend process.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}
