//! HTTP client for the backend `/api/data` endpoint.

use std::time::Duration;

use axum::body::Bytes;
use reqwest::{StatusCode, Url};
use tracing::{info, instrument};

use crate::error::{ProxyError, ServerError};
use crate::types::DataResponse;

/// One upstream GET per call; no retries.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    data_url: Url,
}

impl BackendClient {
    /// `timeout` bounds the whole request, connect to last body byte.
    pub fn new(data_url: Url, timeout: Duration) -> Result<Self, ServerError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ServerError::Client)?;
        Ok(Self { http, data_url })
    }

    pub fn data_url(&self) -> &Url {
        &self.data_url
    }

    /// Fetches the envelope. Returns the raw body for relaying plus its decoded form.
    #[instrument(skip(self), fields(url = %self.data_url))]
    pub async fn fetch_data(&self) -> Result<(Bytes, DataResponse), ProxyError> {
        let url = self.data_url.to_string();
        info!("Fetching data from backend");

        let response = self
            .http
            .get(self.data_url.clone())
            .send()
            .await
            .map_err(|source| ProxyError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ProxyError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|source| ProxyError::Body {
            url: url.clone(),
            source,
        })?;

        let data = serde_json::from_slice::<DataResponse>(&body)
            .map_err(|source| ProxyError::Decode { url, source })?;

        Ok((body, data))
    }
}
