use super::{result_count, tool_text};
use brave_search_api::{DEFAULT_LOCAL_COUNT, SearchService};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct LocalSearchRequest {
    /// Local search query (e.g. 'pizza near Central Park')
    #[serde(default)]
    pub query: Option<String>,
    /// Number of results (1-20, default 5)
    #[serde(default)]
    pub count: Option<i64>,
}

pub async fn local_search(service: &SearchService, request: LocalSearchRequest) -> String {
    let query = request.query.unwrap_or_default();
    let count = result_count(request.count, DEFAULT_LOCAL_COUNT);
    info!("Processing local search: query='{}', count={}", query, count);

    tool_text(
        "brave_local_search",
        service.local_search_text(&query, count).await,
    )
}
