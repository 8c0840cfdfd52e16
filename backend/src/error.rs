use std::net::SocketAddr;

use storage::StorageError;
use thiserror::Error;

/// Fatal errors of the backend process. Per-request storage failures never end up here.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Failed to create items table: {0}")]
    Schema(#[source] StorageError),

    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}
