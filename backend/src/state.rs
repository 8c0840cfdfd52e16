use std::sync::Arc;

use storage::ItemStore;

/// Storage capability, decided once at startup.
#[derive(Clone)]
pub enum StorageMode {
    /// Schema ensured and reachable when the process started.
    Connected(Arc<dyn ItemStore>),
    /// No storage configured, or it was unreachable at startup.
    Mock,
}

impl StorageMode {
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected(_))
    }

    /// Closes the pool if there is one.
    pub async fn close(&self) {
        if let Self::Connected(store) = self {
            store.close().await;
        }
    }
}

impl std::fmt::Debug for StorageMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connected(_) => f.write_str("Connected"),
            Self::Mock => f.write_str("Mock"),
        }
    }
}

/// Shared state handed to every handler.
#[derive(Clone, Debug)]
pub struct AppState {
    pub storage: StorageMode,
}

impl AppState {
    pub fn new(storage: StorageMode) -> Self {
        Self { storage }
    }
}
