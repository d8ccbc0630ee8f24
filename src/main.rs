//! Tool Server Entry Point
//!
//! This is the main entry point for the tool server. It initializes logging,
//! loads configuration, builds the tool registry, and starts the HTTP
//! transport. Registration errors (such as a duplicate tool name) are fatal
//! and abort startup.

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use workbench_mcp_server::core::{Config, HttpTransport, ToolServer};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);

    // Build the server; a duplicate tool registration aborts startup here
    let transport_config = config.transport.clone();
    let server = ToolServer::new(config)?;

    info!("Server initialized with {} tools", server.tool_count());

    let transport = HttpTransport::new(transport_config);
    transport.run(server).await?;

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
