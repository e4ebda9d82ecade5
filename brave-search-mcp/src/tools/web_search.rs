use super::{result_count, result_offset, tool_text};
use brave_search_api::{DEFAULT_WEB_COUNT, SearchService};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct WebSearchRequest {
    /// Search query (max 400 chars, 50 words)
    #[serde(default)]
    pub query: Option<String>,
    /// Number of results (1-20, default 10)
    #[serde(default)]
    pub count: Option<i64>,
    /// Pagination offset (max 9, default 0)
    #[serde(default)]
    pub offset: Option<i64>,
}

pub async fn web_search(service: &SearchService, request: WebSearchRequest) -> String {
    let query = request.query.unwrap_or_default();
    let count = result_count(request.count, DEFAULT_WEB_COUNT);
    let offset = result_offset(request.offset);
    info!(
        "Processing web search: query='{}', count={}, offset={}",
        query, count, offset
    );

    tool_text(
        "brave_web_search",
        service.web_search_text(&query, count, offset).await,
    )
}
