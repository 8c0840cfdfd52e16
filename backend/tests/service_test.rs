//! Tests for the data and health services and for startup mode selection.
//!
//! Uses the scripted `MockItemStore` and a real SQLite `ItemStore` in a temp dir.

use std::sync::Arc;

use backend::{
    activate_store, handle_data_request, handle_health_request, init_storage, BackendError,
    DbStatus, Source, StorageMode,
};
use chrono::Utc;
use storage::{ItemStore, SqliteItemStore};
use tempfile::TempDir;

use mock_item_store::MockItemStore;

async fn sqlite_mode() -> (TempDir, Arc<SqliteItemStore>, StorageMode) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("backend.db");
    let store = Arc::new(
        SqliteItemStore::open(&path.to_string_lossy())
            .await
            .expect("open sqlite"),
    );
    let mode = activate_store(store.clone())
        .await
        .expect("activate sqlite store");
    (dir, store, mode)
}

/// **Test: Mock mode envelope.**
///
/// **Expected:** id 1, source mock, not-connected message, recent timestamp.
#[tokio::test]
async fn test_data_request_mock_mode() {
    let before = Utc::now();
    let envelope = handle_data_request(&StorageMode::Mock).await;

    assert_eq!(envelope.id, 1);
    assert_eq!(envelope.source, Source::Mock);
    assert!(envelope.message.contains("DB not connected"));
    assert!(envelope.timestamp >= before);
    assert!(envelope.timestamp <= Utc::now());
}

/// **Test: Connected store, successful insert.**
///
/// **Expected:** exactly one insert per call; envelope mirrors the returned row.
#[tokio::test]
async fn test_data_request_inserts_one_row_per_call() {
    let store = MockItemStore::new();
    let mode = StorageMode::Connected(Arc::new(store.clone()));

    let first = handle_data_request(&mode).await;
    let second = handle_data_request(&mode).await;

    assert_eq!(store.insert_call_count(), 2);
    assert_eq!(first.source, Source::Database);
    assert_eq!(second.source, Source::Database);
    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);

    let names = store.inserted_names();
    assert_eq!(first.message, format!("Item from DB: {}", names[0]));
    assert!(names[0].starts_with("Sample Item "));
}

/// **Test: Connected store, failing insert.**
///
/// Design smell kept on purpose: a storage failure is not an HTTP error, only
/// `source=error` in the body.
#[tokio::test]
async fn test_data_request_insert_failure_is_in_band() {
    let store = MockItemStore::failing_inserts();
    let mode = StorageMode::Connected(Arc::new(store.clone()));

    let envelope = handle_data_request(&mode).await;

    assert_eq!(store.insert_call_count(), 1, "no retries");
    assert_eq!(envelope.id, 1);
    assert_eq!(envelope.source, Source::Error);
    assert!(envelope
        .message
        .starts_with("Error interacting with database: "));
    assert!(envelope.message.contains("connection reset by peer"));
}

/// **Test: Two requests against a real empty SQLite database.**
///
/// **Expected:** both `database`, ids strictly increasing, timestamps from the rows.
#[tokio::test]
async fn test_data_request_against_sqlite() {
    let (_dir, _store, mode) = sqlite_mode().await;

    let first = handle_data_request(&mode).await;
    let second = handle_data_request(&mode).await;

    assert_eq!(first.source, Source::Database);
    assert_eq!(second.source, Source::Database);
    assert!(second.id > first.id);
    assert!(second.timestamp <= Utc::now());
    assert!(first.message.starts_with("Item from DB: Sample Item "));
}

/// **Test: Store closed mid-run (connection dropped).**
#[tokio::test]
async fn test_data_request_after_pool_closed() {
    let (_dir, store, mode) = sqlite_mode().await;
    store.close().await;

    let envelope = handle_data_request(&mode).await;

    assert_eq!(envelope.source, Source::Error);
    assert_eq!(envelope.id, 1);
    assert!(envelope.message.len() > "Error interacting with database: ".len());
}

#[tokio::test]
async fn test_health_mock_mode_is_down() {
    let health = handle_health_request(&StorageMode::Mock).await;

    assert_eq!(health.status, "OK");
    assert_eq!(health.db_status, DbStatus::Down);
}

#[tokio::test]
async fn test_health_reachable_store_is_up() {
    let (_dir, _store, mode) = sqlite_mode().await;

    let health = handle_health_request(&mode).await;

    assert_eq!(health.status, "OK");
    assert_eq!(health.db_status, DbStatus::Up);
}

/// **Test: Configured but unreachable store.**
///
/// **Expected:** process still reports OK, db DOWN; no writes.
#[tokio::test]
async fn test_health_unreachable_store_is_down() {
    let store = MockItemStore::new();
    let mode = StorageMode::Connected(Arc::new(store.clone()));
    store.set_unreachable(true);

    let health = handle_health_request(&mode).await;

    assert_eq!(health.status, "OK");
    assert_eq!(health.db_status, DbStatus::Down);
    assert_eq!(store.ping_call_count(), 1);
    assert_eq!(store.insert_call_count(), 0);
}

#[tokio::test]
async fn test_init_storage_without_settings_is_mock() {
    let mode = init_storage(None).await.expect("mock mode never fails");

    assert!(!mode.is_connected());
}

/// **Test: Store unreachable at startup downgrades to mock mode.**
#[tokio::test]
async fn test_activate_unreachable_store_downgrades() {
    let store = MockItemStore::unreachable();

    let mode = activate_store(Arc::new(store.clone()))
        .await
        .expect("unreachable store is not fatal");

    assert!(!mode.is_connected());
    assert!(store.is_closed());
    assert_eq!(store.schema_call_count(), 0);
}

/// **Test: Schema failure at startup is fatal.**
#[tokio::test]
async fn test_activate_schema_failure_is_fatal() {
    let store = MockItemStore::failing_schema();

    let err = activate_store(Arc::new(store.clone()))
        .await
        .expect_err("schema failure must abort startup");

    assert!(matches!(err, BackendError::Schema(_)));
    assert!(store.is_closed());
}

#[tokio::test]
async fn test_activate_healthy_store_connects() {
    let store = MockItemStore::new();

    let mode = activate_store(Arc::new(store.clone()))
        .await
        .expect("healthy store");

    assert!(mode.is_connected());
    assert_eq!(store.schema_call_count(), 1);
    assert!(!store.is_closed());
}
