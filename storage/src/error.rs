//! Storage error types.
//!
//! Used by [`crate::ItemStore`] implementations and the backend startup path.

use thiserror::Error;

/// Errors that can occur when using storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Opening the pool or its first connection failed.
    #[error("Connection error: {0}")]
    Connect(#[source] sqlx::Error),

    /// `CREATE TABLE IF NOT EXISTS items` was rejected.
    #[error("Error creating items table: {0}")]
    Schema(#[source] sqlx::Error),

    /// The insert round trip failed; no row was written.
    #[error("{0}")]
    Insert(#[source] sqlx::Error),
}
