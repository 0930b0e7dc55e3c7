use anyhow::{Context, Result};
use peptide_proxy::{config, server};
use tracing::info;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// `RUST_LOG` wins over the configured level; either must name a plain level.
fn resolve_log_level(env_level: Option<String>, configured: &str) -> Result<LevelFilter> {
    let level = env_level.unwrap_or_else(|| configured.to_string());

    level.parse().map_err(|_| {
        anyhow::anyhow!(
            "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
            level
        )
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load()
        .await
        .context("Failed to load configuration")?;

    let level = resolve_log_level(std::env::var("RUST_LOG").ok(), &config.server.logs.level)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::default().add_directive(level.into()))
        .json()
        .init();

    info!("Starting peptide proxy with log level: {}", level);

    server::run(config).await?;

    Ok(())
}
