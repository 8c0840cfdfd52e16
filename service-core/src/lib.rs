//! # service-core
//!
//! Ambient pieces shared by the backend and frontend binaries: tracing
//! initialization, environment helpers, the open CORS layer and the graceful
//! shutdown signal. Holds no domain types.

pub mod cors;
pub mod env;
pub mod error;
pub mod logger;
pub mod shutdown;

pub use cors::open_cors;
pub use error::CoreError;
pub use logger::{init_tracing, LogFormat};
pub use shutdown::shutdown_signal;
