//! # brave-search-mcp
//!
//! A Model Context Protocol (MCP) server that gives AI clients (like Claude
//! Desktop) web and local search through the Brave Search API.
//!
//! ## Features
//!
//! - **Web Search**: general queries with pagination, up to 20 results per request
//! - **Local Search**: businesses and places with address, rating, hours and
//!   description, falling back to web results when nothing local matches
//! - **Rate Limiting**: every upstream request is checked against per-second and
//!   per-month quotas before it is sent
//! - **MCP Integration**: standard Model Context Protocol over stdio
//!
//! ## Architecture
//!
//! The server is a thin layer over [`brave_search_api`]:
//! - [`brave_search_api::SearchService`] runs the searches and renders text
//! - [`tools`] maps each MCP tool onto the service and turns errors into text
//!
//! ## Quick Start
//!
//! ### 1. Get an API key
//! ```bash
//! export BRAVE_API_KEY=your-subscription-token
//! ```
//!
//! ### 2. Start the MCP server
//! ```bash
//! brave-search-mcp
//! ```
//!
//! ### 3. Use as a library
//! ```no_run
//! use brave_search_mcp::{ServerConfig, run_server};
//!
//! # async fn example() -> anyhow::Result<()> {
//! run_server(ServerConfig::from_env()?).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## MCP Tools
//!
//! ### `brave_web_search`
//! - `query`: search text
//! - `count`: number of results, clamped to 20 (default 10)
//! - `offset`: pagination offset (default 0)
//!
//! ### `brave_local_search`
//! - `query`: local search text, e.g. "pizza near Central Park"
//! - `count`: number of results, clamped to 20 (default 5)
//!
//! Both tools always return text. Failures are reported as `Error: <message>`.
//!
//! ## Integration with Claude Desktop
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "brave-search": {
//!       "command": "brave-search-mcp",
//!       "env": { "BRAVE_API_KEY": "your-subscription-token" }
//!     }
//!   }
//! }
//! ```

mod server;
pub mod tools;

pub use server::BraveSearchMcpServer;

use anyhow::{Context, Result};
use brave_search_api::BraveConfig;
use tracing::info;

/// Configuration for the Brave Search MCP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Upstream API settings, including the API key and rate limits
    pub brave: BraveConfig,
}

impl ServerConfig {
    pub fn new(brave: BraveConfig) -> Self {
        Self { brave }
    }

    /// Build the configuration from `BRAVE_*` environment variables.
    ///
    /// # Errors
    /// Fails when `BRAVE_API_KEY` is missing or blank, or a limit override is
    /// not a number.
    pub fn from_env() -> Result<Self> {
        let brave = BraveConfig::from_env().context("Failed to load Brave configuration")?;
        Ok(Self::new(brave))
    }
}

/// Run the Brave Search MCP server until the client disconnects.
///
/// The server communicates using the Model Context Protocol over stdio, so
/// nothing else may write to stdout while it runs.
///
/// # Errors
/// - HTTP client initialisation errors
/// - MCP protocol communication errors
pub async fn run_server(config: ServerConfig) -> Result<()> {
    info!("Starting Brave Search MCP server");

    let server = BraveSearchMcpServer::new(config)?;

    info!("Brave Search MCP server initialized, starting stdio transport");
    server.serve_stdio().await
}
