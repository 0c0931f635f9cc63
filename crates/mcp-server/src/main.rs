//! Alpha Vantage MCP Server binary.
//!
//! ## Usage
//!
//! Add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "alphavantage": {
//!       "command": "alphavantage-mcp",
//!       "env": { "ALPHAVANTAGE_API_KEY": "YOUR_KEY" }
//!     }
//!   }
//! }
//! ```
//!
//! `alphavantage-mcp --print-tools` dumps the catalog as JSON and exits.

use alphavantage_client::AvClient;
use alphavantage_mcp::tools;
use alphavantage_mcp::AlphaVantageService;
use anyhow::{Context, Result};
use rmcp::transport::stdio;
use rmcp::ServiceExt;

#[tokio::main]
async fn main() -> Result<()> {
    // Logging goes to stderr only (stdout carries the MCP protocol).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    if std::env::args().any(|arg| arg == "--print-tools") {
        let inventory = tools::tool_inventory_json(env!("CARGO_PKG_VERSION"));
        println!("{}", serde_json::to_string_pretty(&inventory)?);
        return Ok(());
    }

    log::info!("Starting Alpha Vantage MCP server");

    let client = AvClient::from_env().context("failed to configure Alpha Vantage client")?;
    let service = AlphaVantageService::new(client);
    let server = service.serve(stdio()).await?;

    server.waiting().await?;

    log::info!("Alpha Vantage MCP server stopped");
    Ok(())
}
