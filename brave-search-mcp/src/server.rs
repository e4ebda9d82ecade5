use crate::ServerConfig;
use crate::tools::{
    self, local_search::LocalSearchRequest, web_search::WebSearchRequest,
};
use anyhow::Result;
use brave_search_api::SearchService;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    transport::stdio,
};
use tracing::info;

/// Brave Search MCP server exposing web and local search tools
#[derive(Clone)]
pub struct BraveSearchMcpServer {
    service: SearchService,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl BraveSearchMcpServer {
    /// Create a server talking to the Brave API described by `config`
    pub fn new(config: ServerConfig) -> Result<Self> {
        info!(
            "Initializing Brave Search MCP server: base_url={}, limits={:?}",
            config.brave.base_url, config.brave.limits
        );

        let service = SearchService::from_config(config.brave)?;
        Ok(Self::with_service(service))
    }

    /// Create a server over an existing search service
    pub fn with_service(service: SearchService) -> Self {
        Self {
            service,
            tool_router: Self::tool_router(),
        }
    }

    /// Web search tool
    #[tool(
        description = "Performs a web search using the Brave Search API, ideal for general queries, news, articles, and online content. Use this for broad information gathering, recent events, or when you need diverse web sources. Supports pagination, content filtering, and freshness controls. Maximum 20 results per request, with offset for pagination."
    )]
    pub async fn brave_web_search(
        &self,
        Parameters(request): Parameters<WebSearchRequest>,
    ) -> Result<CallToolResult, McpError> {
        let text = tools::web_search::web_search(&self.service, request).await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Local search tool, falling back to web search when no places match
    #[tool(
        description = "Searches for local businesses and places using Brave's Local Search API. Best for queries related to physical locations, businesses, restaurants, services, etc. Returns detailed information including:\n- Business names and addresses\n- Ratings and review counts\n- Phone numbers and opening hours\nUse this when the query implies 'near me' or mentions specific locations. Automatically falls back to web search if no local results are found."
    )]
    pub async fn brave_local_search(
        &self,
        Parameters(request): Parameters<LocalSearchRequest>,
    ) -> Result<CallToolResult, McpError> {
        let text = tools::local_search::local_search(&self.service, request).await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Serve the MCP server using stdio transport
    pub async fn serve_stdio(self) -> Result<()> {
        info!("Starting MCP server with stdio transport");

        let server = self.serve(stdio()).await?;
        let quit_reason = server.waiting().await?;

        info!("MCP server quit: {:?}", quit_reason);
        Ok(())
    }
}

#[tool_handler]
impl ServerHandler for BraveSearchMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Brave Search MCP Server - brave_web_search for general web queries, brave_local_search for businesses and places (falls back to web results when nothing local matches)"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "brave-search".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }
}
