//! grist-mcp: Grist tools for MCP clients over stdio
//!
//! Configuration comes from the environment (a `.env` file in the working
//! directory is loaded first), then `~/.config/grist-mcp/config.yaml`.
//! Logs go to stderr; stdout carries the protocol.

mod params;
mod server;

use std::sync::Arc;

use grist_mcp_core::{
    log_debug, log_info, log_warn, resolve_credential, ChainConfigProvider, ConfigKey,
    ConfigProvider, GristTools, LogLevel, SharedLogger, StderrLogger,
};
use rmcp::{transport::stdio, ServiceExt};

use crate::server::GristServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let chain = ChainConfigProvider::standard();

    let level = chain
        .get(ConfigKey::LogLevel)
        .map(|value| LogLevel::parse(&value))
        .unwrap_or_default();
    let logger: SharedLogger = Arc::new(StderrLogger::new().with_level(level));

    let sources: Vec<&str> = chain.providers().iter().map(|p| p.name()).collect();
    log_debug!(logger, "Config sources: {}", sources.join(", "));
    if let Some(provider) = chain.find_provider(ConfigKey::ApiKey) {
        log_debug!(logger, "API key supplied by {}", provider.name());
    }

    let config: Arc<dyn ConfigProvider> = Arc::new(chain);

    match resolve_credential(config.as_ref()) {
        Ok(credential) => log_info!(logger, "Using Grist API at {}", credential),
        Err(e) => log_warn!(logger, "{}; tool calls will fail until it is set", e),
    }

    let tools = GristTools::from_config(config, logger.clone())?;
    let server = GristServer::new(Arc::new(tools), logger.clone());

    log_info!(logger, "Starting grist-mcp {} on stdio", env!("CARGO_PKG_VERSION"));
    let service = server.serve(stdio()).await?;
    service.waiting().await?;

    log_info!(logger, "Shutting down");
    Ok(())
}
