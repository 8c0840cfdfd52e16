//! Item record model.
//!
//! Maps to the `items` table. All fields are assigned by the engine except `name`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ItemRecord {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
