//! # Frontend web server
//!
//! Serves the HTML page at `/` and relays `GET <backend>/api/data` at `/data`.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod server;
pub mod types;

pub use cli::Cli;
pub use client::BackendClient;
pub use config::FrontendConfig;
pub use error::{PageError, ProxyError, ServerError};
pub use server::{router, run, AppState};
pub use types::DataResponse;
