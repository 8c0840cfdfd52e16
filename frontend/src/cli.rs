//! CLI parser; flags override the environment.

use clap::Parser;
use service_core::LogFormat;

use crate::config::FrontendConfig;

#[derive(Parser, Debug)]
#[command(name = "frontend")]
#[command(about = "Web frontend: HTML page and /data relay to the backend", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Listen port (overrides PORT).
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Backend base URL (overrides BACKEND_URL).
    #[arg(short, long)]
    pub backend_url: Option<String>,

    /// Log format, `text` or `json` (overrides LOG_FORMAT).
    #[arg(long)]
    pub log_format: Option<LogFormat>,
}

impl Cli {
    pub fn apply(self, mut config: FrontendConfig) -> FrontendConfig {
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(url) = self.backend_url {
            config.backend_url = url;
        }
        if let Some(format) = self.log_format {
            config.log_format = format;
        }
        config
    }
}
