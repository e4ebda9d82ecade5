//! The two text-producing search operations

use crate::client::{BraveClient, SearchBackend};
use crate::config::BraveConfig;
use crate::error::Result;
use crate::format::format_web;
use crate::local_search::LocalSearch;
use crate::rate_gate::RateGate;
use std::sync::Arc;

/// Default number of web results
pub const DEFAULT_WEB_COUNT: u32 = 10;
/// Default number of local results
pub const DEFAULT_LOCAL_COUNT: u32 = 5;

/// Web and local search rendered as plain text.
///
/// Cheap to clone; clones share the backend and therefore the rate gate.
#[derive(Clone)]
pub struct SearchService {
    backend: Arc<dyn SearchBackend>,
    local: Arc<LocalSearch>,
}

impl SearchService {
    /// Build a service over the real Brave API.
    ///
    /// The rate gate is created here from `config.limits` and shared by every
    /// request the service makes.
    pub fn from_config(config: BraveConfig) -> Result<Self> {
        let gate = Arc::new(RateGate::new(config.limits));
        let client = BraveClient::new(config, gate)?;
        Ok(Self::new(Arc::new(client)))
    }

    /// Build a service over any backend
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        let local = Arc::new(LocalSearch::new(backend.clone()));
        Self { backend, local }
    }

    /// Web search formatted as `Title`/`Description`/`URL` blocks
    pub async fn web_search_text(&self, query: &str, count: u32, offset: u32) -> Result<String> {
        let results = self.backend.web_search(query, count, offset).await?;
        Ok(format_web(&results))
    }

    /// Local search formatted as place blocks, or web results on fallback
    pub async fn local_search_text(&self, query: &str, count: u32) -> Result<String> {
        self.local.run(query, count).await
    }
}
