//! # Backend API service
//!
//! Serves `/api/data` and `/health`. Storage is optional: with `DB_HOST` set the
//! service inserts one item per data request into PostgreSQL, otherwise it runs
//! in mock mode and returns synthetic envelopes.

pub mod cli;
pub mod config;
pub mod envelope;
pub mod error;
pub mod handlers;
pub mod server;
pub mod startup;
pub mod state;

pub use cli::Cli;
pub use config::BackendConfig;
pub use envelope::{DbStatus, Envelope, HealthStatus, Source};
pub use error::BackendError;
pub use handlers::{handle_data_request, handle_health_request};
pub use server::{router, run, serve};
pub use startup::{activate_store, init_storage};
pub use state::{AppState, StorageMode};
