//! Two-stage local search: resolve location ids, then fetch details and descriptions

use crate::client::SearchBackend;
use crate::error::Result;
use crate::format::{format_local, format_web};
use std::sync::Arc;

/// Runs a local search against any [`SearchBackend`].
///
/// A single run costs up to three rate-limit slots: the location query, then
/// the POI and description lookups. When the location query yields no ids the
/// run falls back to a plain web search (two slots in total).
pub struct LocalSearch {
    backend: Arc<dyn SearchBackend>,
}

impl LocalSearch {
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self { backend }
    }

    /// Search for places matching `query` and render them as text.
    ///
    /// # Errors
    /// The first failure from any step is returned as-is; no partial results
    /// are rendered.
    pub async fn run(&self, query: &str, count: u32) -> Result<String> {
        let ids = self.backend.location_ids(query, count).await?;

        if ids.is_empty() {
            tracing::info!("No locations for '{}', falling back to web search", query);
            let results = self.backend.web_search(query, count, 0).await?;
            return Ok(format_web(&results));
        }

        tracing::debug!("Fetching details for {} locations", ids.len());
        let (pois, descriptions) = tokio::try_join!(
            self.backend.poi_lookup(&ids),
            self.backend.description_lookup(&ids),
        )?;

        Ok(format_local(&pois, &descriptions))
    }
}
