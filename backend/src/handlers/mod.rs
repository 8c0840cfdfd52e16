//! HTTP handlers and the service functions behind them.

mod data;
mod health;

pub use data::{data_handler, handle_data_request};
pub use health::{handle_health_request, health_handler};
