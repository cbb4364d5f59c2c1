//! MCP Server Entry Point
//!
//! Initializes logging, loads configuration, and serves the item generator
//! tools on the configured transport until the client disconnects or the
//! process is terminated.

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use itemgen_mcp_server::core::{Config, McpServer, TransportService};
use itemgen_mcp_server::core::config::LoggingConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    init_logging(&config.logging);

    config.validate()?;

    info!("Starting {} v{}", config.server.name, config.server.version);
    info!(
        "Serving documents from {:?} (workflow: {}, schema: {})",
        config.documents.root, config.documents.workflow_path, config.documents.schema_path
    );

    let transport = TransportService::new(config.transport.clone());
    let server = McpServer::new(config);

    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr; stdout belongs to the stdio transport.
fn init_logging(logging: &LoggingConfig) {
    let level = match logging.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    if logging.with_timestamps {
        builder.init();
    } else {
        builder.without_time().init();
    }
}
