//! Integration tests for [`storage::PgItemStore`] against a live PostgreSQL.
//!
//! Skipped unless `DB_HOST` is set. Uses `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`
//! with the same defaults as the backend. Tests share the `items` table, so they run
//! serially and may recreate it.

use std::env;
use std::time::Duration;

use serial_test::serial;
use storage::{ConnectionSettings, ItemStore, PgItemStore};

fn settings_from_env() -> Option<ConnectionSettings> {
    let host = env::var("DB_HOST").ok().filter(|h| !h.is_empty())?;
    Some(ConnectionSettings {
        host,
        port: env::var("DB_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(5432),
        user: env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string()),
        password: env::var("DB_PASSWORD").unwrap_or_default(),
        database: env::var("DB_NAME").unwrap_or_else(|_| "postgres".to_string()),
        acquire_timeout: Duration::from_secs(5),
    })
}

#[tokio::test]
#[serial]
async fn test_postgres_round_trip() {
    let Some(settings) = settings_from_env() else {
        eprintln!("DB_HOST not set, skipping PostgreSQL test");
        return;
    };

    let store = PgItemStore::connect(&settings)
        .await
        .expect("Failed to connect to PostgreSQL");
    store.ensure_schema().await.expect("first ensure_schema");
    store.ensure_schema().await.expect("second ensure_schema");
    assert!(store.ping().await);

    let first = store.insert_item("pg item a").await.expect("insert a");
    let second = store.insert_item("pg item b").await.expect("insert b");
    assert!(second.id > first.id);
    assert_eq!(second.name, "pg item b");
    assert!(second.created_at >= first.created_at);

    store.close().await;
    assert!(!store.ping().await);
}

async fn count_items(store: &PgItemStore) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM items")
        .fetch_one(store.pool_manager().pool())
        .await
        .expect("Failed to count items");
    count
}

/// **Test: Insert into a table created with `SERIAL` / `TIMESTAMP` columns.**
///
/// **Setup:** `items` recreated with INT4 id and a timestamp without time zone.
/// **Action:** `ensure_schema` (no-op) then `insert_item`.
/// **Expected:** Insert decodes into the record and writes exactly one row.
#[tokio::test]
#[serial]
async fn test_postgres_insert_into_int4_table() {
    let Some(settings) = settings_from_env() else {
        eprintln!("DB_HOST not set, skipping PostgreSQL test");
        return;
    };

    let store = PgItemStore::connect(&settings)
        .await
        .expect("Failed to connect to PostgreSQL");
    let pool = store.pool_manager().pool();
    sqlx::query("DROP TABLE IF EXISTS items")
        .execute(pool)
        .await
        .expect("drop items");
    sqlx::query(
        "CREATE TABLE items (
            id SERIAL PRIMARY KEY,
            name VARCHAR(100) NOT NULL,
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )",
    )
    .execute(pool)
    .await
    .expect("create int4 items table");
    store.ensure_schema().await.expect("ensure_schema on existing table");

    let before = count_items(&store).await;
    let record = store
        .insert_item("int4 item")
        .await
        .expect("insert into int4 table");

    assert_eq!(record.name, "int4 item");
    assert!(record.id > 0);
    assert_eq!(count_items(&store).await, before + 1);

    sqlx::query("DROP TABLE items")
        .execute(pool)
        .await
        .expect("drop int4 items table");
    store.close().await;
}
