//! Backend binary. Config from env (`.env` honoured) and optional CLI flags.

use anyhow::Result;
use backend::{BackendConfig, Cli};
use clap::Parser;
use service_core::init_tracing;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.apply(BackendConfig::load()?);

    init_tracing(config.log_format, config.log_file.as_deref())?;
    info!(
        port = config.port,
        mock_mode = config.is_mock_mode(),
        "Loaded backend config"
    );

    backend::run(config).await?;
    Ok(())
}
