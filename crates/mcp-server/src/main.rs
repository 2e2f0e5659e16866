use anyhow::Result;
use rust_mcp_sdk::{
    mcp_server::{hyper_server, HyperServerOptions},
    schema::{
        Implementation, InitializeResult, ServerCapabilities, ServerCapabilitiesTools,
        LATEST_PROTOCOL_VERSION,
    },
};
use std::time::Duration;
use tracing::info;

use openbb_docs_mcp_server::{init_logging, Config, OpenBbDocsHandler};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    init_logging(&config.logging)?;
    config.validate()?;

    let server_details = InitializeResult {
        server_info: Implementation {
            name: config.server.name.clone(),
            version: config.server.version.clone(),
        },
        capabilities: ServerCapabilities {
            tools: Some(ServerCapabilitiesTools::default()),
            ..Default::default()
        },
        instructions: Some(config.server.instructions.clone()),
        meta: None,
        protocol_version: LATEST_PROTOCOL_VERSION.into(),
    };

    let options = HyperServerOptions {
        host: config.server.bind_address.clone(),
        port: config.server.port,
        ping_interval: Duration::from_secs(config.server.ping_interval_secs),
        ..Default::default()
    };

    info!(
        name = %config.server.name,
        host = %config.server.bind_address,
        port = config.server.port,
        "Starting OpenBB Docs MCP server"
    );

    let handler = OpenBbDocsHandler::new(config)?;
    let server = hyper_server::create_server(server_details, handler, options);

    server
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {e}"))?;

    Ok(())
}
