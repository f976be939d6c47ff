//! Simulation API server
//!
//! Usage: `simulation-api [CONFIG_PATH]`

use anyhow::Result;
use simulation::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path = std::env::args().nth(1);
    let config = AppConfig::load(config_path.as_deref())?;

    match &config_path {
        Some(path) => tracing::info!("Loaded configuration from {}", path),
        None => tracing::info!("No configuration file given, using defaults"),
    }

    ServerBuilder::new().with_config(config).serve().await
}
