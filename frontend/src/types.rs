//! Backend envelope as seen by the frontend.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Decoded `/api/data` body. Only used for validation and logging; the raw body is relayed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DataResponse {
    pub id: i64,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub source: String,
}

impl fmt::Display for DataResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ID: '{}', Message: '{}', Timestamp: '{}', Source: '{}'}}",
            self.id,
            self.message,
            self.timestamp.to_rfc3339(),
            self.source
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let data: DataResponse = serde_json::from_str(
            r#"{"id":3,"message":"Item from DB: x","timestamp":"2025-01-02T03:04:05Z","source":"database"}"#,
        )
        .unwrap();

        assert_eq!(
            data.to_string(),
            "{ID: '3', Message: 'Item from DB: x', Timestamp: '2025-01-02T03:04:05+00:00', Source: 'database'}"
        );
    }
}
