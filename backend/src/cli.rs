//! CLI parser; flags override the environment.

use clap::Parser;
use service_core::LogFormat;

use crate::config::BackendConfig;

#[derive(Parser, Debug)]
#[command(name = "backend")]
#[command(about = "Item API backend: /api/data and /health", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Listen port (overrides PORT).
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Log format, `text` or `json` (overrides LOG_FORMAT).
    #[arg(long)]
    pub log_format: Option<LogFormat>,
}

impl Cli {
    pub fn apply(self, mut config: BackendConfig) -> BackendConfig {
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(format) = self.log_format {
            config.log_format = format;
        }
        config
    }
}
