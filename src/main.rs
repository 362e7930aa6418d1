mod config;
mod constants;
mod flood;
mod formatters;
mod models;
mod rewards;
mod service;

use anyhow::Result;
use rmcp::ServiceExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::constants::DEFAULT_LOG_FILTER;
use crate::service::RiverWatch;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        "Starting river watch MCP server (forecast seed: {})",
        config
            .forecast_seed
            .map_or_else(|| "entropy".to_string(), |seed| seed.to_string())
    );

    let river_watch = RiverWatch::new(&config);
    let server = river_watch.serve(rmcp::transport::stdio()).await?;
    server.waiting().await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
