//! Tool implementations for the Brave Search MCP server
//!
//! Each tool turns its request into a call on
//! [`SearchService`](brave_search_api::SearchService) and always produces text.
//! Failures of any kind come back as `Error: <message>` rather than as a
//! protocol error.

pub mod local_search;
pub mod web_search;

use brave_search_api::{MAX_RESULT_COUNT, SearchError};
use tracing::warn;

/// Requested result count, defaulted and bounded to `0..=MAX_RESULT_COUNT`.
///
/// Out-of-range values are accepted from callers and bounded here rather than
/// rejected.
pub fn result_count(requested: Option<i64>, default: u32) -> u32 {
    requested.map_or(default, |count| {
        u32::try_from(count.clamp(0, i64::from(MAX_RESULT_COUNT))).unwrap_or(default)
    })
}

/// Requested pagination offset; negative values become 0
pub fn result_offset(requested: Option<i64>) -> u32 {
    requested.map_or(0, |offset| u32::try_from(offset.max(0)).unwrap_or(u32::MAX))
}

/// Flatten a search outcome into the text returned to the MCP client.
pub fn tool_text(tool: &str, result: Result<String, SearchError>) -> String {
    match result {
        Ok(text) => text,
        Err(e) => {
            warn!("{} failed: {}", tool, e);
            format!("Error: {e}")
        }
    }
}
