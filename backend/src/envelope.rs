//! Wire types of the backend API.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use storage::ItemRecord;

/// Placeholder id used whenever no row was written.
pub const PLACEHOLDER_ID: i64 = 1;
pub const DEFAULT_MESSAGE: &str = "Default mock message";
pub const MOCK_MODE_MESSAGE: &str = "Hello from the backend API (DB not connected)";
pub const INSERT_ERROR_PREFIX: &str = "Error interacting with database: ";

/// Which path produced an [`Envelope`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Mock,
    Database,
    Error,
}

/// Body of `GET /api/data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub id: i64,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub source: Source,
}

impl Envelope {
    /// `id=1`, default message, current time, `source=mock`.
    pub fn mock() -> Self {
        Self {
            id: PLACEHOLDER_ID,
            message: DEFAULT_MESSAGE.to_string(),
            timestamp: Utc::now(),
            source: Source::Mock,
        }
    }

    /// Envelope for a freshly inserted row.
    pub fn from_record(record: ItemRecord) -> Self {
        Self {
            id: record.id,
            message: format!("Item from DB: {}", record.name),
            timestamp: record.created_at,
            source: Source::Database,
        }
    }

    /// Keeps the placeholder id and current time; carries the failure cause in `message`.
    pub fn storage_error(cause: impl std::fmt::Display) -> Self {
        Self {
            message: format!("{INSERT_ERROR_PREFIX}{cause}"),
            source: Source::Error,
            ..Self::mock()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DbStatus {
    Up,
    Down,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub db_status: DbStatus,
    /// RFC 3339, UTC, second precision.
    pub timestamp: String,
}

impl HealthStatus {
    pub fn now(db_status: DbStatus) -> Self {
        Self {
            status: "OK".to_string(),
            db_status,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}
