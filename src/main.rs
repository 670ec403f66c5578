//! Site Intake - Main entry point
//!
//! Runs the intake MCP server on stdio.

use anyhow::Result;
use site_intake::{
    Config, IntakeMcpServer, IntakeServiceImpl, LinkOpener, LoggingOpener, Metrics, SystemOpener,
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL can seed the filter
    let config = Config::from_env();

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let default_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting intake server for https://{}/{}",
        config.messaging_host, config.recipient_id
    );

    let opener: Arc<dyn LinkOpener> = if config.open_links {
        Arc::new(SystemOpener)
    } else {
        Arc::new(LoggingOpener)
    };

    let metrics = Metrics::new();
    let intake_service = Arc::new(IntakeServiceImpl::from_config(
        &config,
        opener,
        metrics.clone(),
    ));

    let server = IntakeMcpServer::new(intake_service, metrics.clone(), config.redirect_delay());

    info!(
        "Redirect delay: {} ms, notice TTL: {} ms, open links: {}",
        config.redirect_delay_ms, config.notice_ttl_ms, config.open_links
    );

    info!("Starting MCP server with stdio transport");
    site_intake::server::run_server(server).await?;

    info!(summary = ?metrics.summary(), "Intake server shutdown complete");
    Ok(())
}
