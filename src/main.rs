//! SenseNet MCP Bridge Entry Point
//!
//! Initializes logging, loads and validates configuration, then serves the
//! tool endpoints over HTTP.

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use sensenet_mcp_bridge::core::config::LoggingConfig;
use sensenet_mcp_bridge::core::{Config, McpServer};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging first so configuration warnings are not lost
    init_logging(&LoggingConfig::from_env().level);

    // Load configuration from environment
    let config = Config::from_env();

    info!("Starting {} v{}", config.server.name, config.server.version);

    // Validate configuration and wire the tools capability
    let server = McpServer::new(config)?;

    info!("Server initialized");

    server.serve().await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Configures tracing with the specified log level and format.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
