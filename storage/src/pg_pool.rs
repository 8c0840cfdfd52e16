//! PostgreSQL connection settings and pool wrapper.

use std::fmt;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;

use crate::error::StorageError;

/// Connection parameters for the items database.
///
/// `Display` renders a libpq-style connection string with the password masked,
/// so it can be logged as is.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    /// Upper bound on waiting for a pooled connection.
    pub acquire_timeout: Duration,
}

impl ConnectionSettings {
    fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
            .ssl_mode(PgSslMode::Disable)
    }
}

impl fmt::Display for ConnectionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "host={} port={} user={} password=*** dbname={} sslmode=disable",
            self.host, self.port, self.user, self.database
        )
    }
}

impl fmt::Debug for ConnectionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("database", &self.database)
            .field("acquire_timeout", &self.acquire_timeout)
            .finish()
    }
}

/// Owns the PostgreSQL pool shared by all requests.
#[derive(Clone)]
pub struct PgPoolManager {
    pool: PgPool,
}

impl PgPoolManager {
    /// Builds the pool and opens its first connection.
    pub async fn connect(settings: &ConnectionSettings) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .acquire_timeout(settings.acquire_timeout)
            .connect_with(settings.connect_options())
            .await
            .map_err(StorageError::Connect)?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> ConnectionSettings {
        ConnectionSettings {
            host: "db.internal".to_string(),
            port: 5432,
            user: "app".to_string(),
            password: "hunter2".to_string(),
            database: "items".to_string(),
            acquire_timeout: Duration::from_secs(5),
        }
    }

    #[test]
    fn test_display_masks_password() {
        let rendered = settings().to_string();
        assert_eq!(
            rendered,
            "host=db.internal port=5432 user=app password=*** dbname=items sslmode=disable"
        );
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn test_debug_masks_password() {
        let rendered = format!("{:?}", settings());
        assert!(rendered.contains("db.internal"));
        assert!(!rendered.contains("hunter2"));
    }
}
