//! Frontend binary. Config from env (`.env` honoured) and optional CLI flags.

use anyhow::Result;
use clap::Parser;
use frontend::{Cli, FrontendConfig};
use service_core::init_tracing;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.apply(FrontendConfig::load()?);

    init_tracing(config.log_format, config.log_file.as_deref())?;
    info!(
        port = config.port,
        backend_url = %config.backend_url,
        templates_dir = %config.templates_dir.display(),
        "Loaded frontend config"
    );

    frontend::run(config).await
}
