//! Frontend configuration, loaded once from the environment.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Result};
use reqwest::Url;
use service_core::{env, LogFormat};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8081";
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_TEMPLATES_DIR: &str = "templates";

#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// PORT
    pub port: u16,
    /// BACKEND_URL, base URL of the backend service
    pub backend_url: String,
    /// BACKEND_TIMEOUT_SECS, deadline for the whole upstream request
    pub backend_timeout: Duration,
    /// TEMPLATES_DIR, directory holding `index.html`
    pub templates_dir: PathBuf,
    /// LOG_FORMAT
    pub log_format: LogFormat,
    /// LOG_FILE
    pub log_file: Option<String>,
}

impl FrontendConfig {
    pub fn load() -> Result<Self> {
        Ok(Self {
            port: env::parse_or("PORT", DEFAULT_PORT)?,
            backend_url: env::var_or("BACKEND_URL", DEFAULT_BACKEND_URL),
            backend_timeout: Duration::from_secs(env::parse_or(
                "BACKEND_TIMEOUT_SECS",
                DEFAULT_BACKEND_TIMEOUT_SECS,
            )?),
            templates_dir: PathBuf::from(env::var_or("TEMPLATES_DIR", DEFAULT_TEMPLATES_DIR)),
            log_format: env::parse_or("LOG_FORMAT", LogFormat::Json)?,
            log_file: env::var_opt("LOG_FILE"),
        })
    }

    /// Checks that BACKEND_URL is an absolute http(s) URL.
    pub fn validate(&self) -> Result<()> {
        self.api_data_url().map(|_| ())
    }

    /// `<BACKEND_URL>/api/data`, appending to any path already in the base URL.
    pub fn api_data_url(&self) -> Result<Url> {
        let mut url = match Url::parse(&self.backend_url) {
            Ok(url) => url,
            Err(e) => bail!("BACKEND_URL is not a valid URL: {} ({})", self.backend_url, e),
        };
        if !matches!(url.scheme(), "http" | "https") {
            bail!("BACKEND_URL must use http or https: {}", self.backend_url);
        }
        match url.path_segments_mut() {
            Ok(mut segments) => {
                segments.pop_if_empty().extend(["api", "data"]);
            }
            Err(()) => bail!("BACKEND_URL cannot be a base URL: {}", self.backend_url),
        }
        Ok(url)
    }
}
