use anyhow::Result;
use brave_search_mcp::{ServerConfig, run_server};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing on stderr; stdout is the MCP channel
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    // Configure the server from BRAVE_API_KEY and friends
    let config = ServerConfig::from_env()?;

    // Run the MCP server
    run_server(config).await
}
