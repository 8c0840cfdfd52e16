//! Backend configuration, loaded once from the environment.

use std::time::Duration;

use anyhow::{Context, Result};
use service_core::{env, LogFormat};
use storage::ConnectionSettings;

pub const DEFAULT_PORT: u16 = 8081;
pub const DEFAULT_DB_PORT: u16 = 5432;
pub const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// PORT
    pub port: u16,
    /// `None` when DB_HOST is unset or empty (mock mode).
    pub database: Option<ConnectionSettings>,
    /// LOG_FORMAT
    pub log_format: LogFormat,
    /// LOG_FILE
    pub log_file: Option<String>,
}

impl BackendConfig {
    pub fn load() -> Result<Self> {
        let port = env::parse_or("PORT", DEFAULT_PORT)?;
        let log_format = env::parse_or("LOG_FORMAT", LogFormat::Text)?;
        let log_file = env::var_opt("LOG_FILE");

        let database = match env::var_opt("DB_HOST") {
            Some(host) => Some(load_connection_settings(host)?),
            None => None,
        };

        Ok(Self {
            port,
            database,
            log_format,
            log_file,
        })
    }

    pub fn is_mock_mode(&self) -> bool {
        self.database.is_none()
    }
}

fn load_connection_settings(host: String) -> Result<ConnectionSettings> {
    let acquire_timeout_secs =
        env::parse_or("DB_ACQUIRE_TIMEOUT_SECS", DEFAULT_ACQUIRE_TIMEOUT_SECS)?;

    Ok(ConnectionSettings {
        host,
        port: env::parse_or("DB_PORT", DEFAULT_DB_PORT).context("DB_PORT")?,
        user: env::var_or("DB_USER", "postgres"),
        // not trimmed; whitespace may be part of a password
        password: std::env::var("DB_PASSWORD").unwrap_or_default(),
        database: env::var_or("DB_NAME", "postgres"),
        acquire_timeout: Duration::from_secs(acquire_timeout_secs),
    })
}
