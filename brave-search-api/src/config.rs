//! Configuration for the Brave Search client

use crate::error::{Result, SearchError};
use crate::rate_gate::RateLimits;
use std::time::Duration;

/// Environment variable holding the subscription token
pub const API_KEY_ENV: &str = "BRAVE_API_KEY";
/// Environment variable overriding the API base URL
pub const BASE_URL_ENV: &str = "BRAVE_API_BASE_URL";
/// Environment variable overriding the per-second request limit
pub const PER_SECOND_ENV: &str = "BRAVE_RATE_LIMIT_PER_SECOND";
/// Environment variable overriding the per-month request limit
pub const PER_MONTH_ENV: &str = "BRAVE_RATE_LIMIT_PER_MONTH";

/// Default Brave Search API root
pub const DEFAULT_BASE_URL: &str = "https://api.search.brave.com/res/v1";
/// Default timeout applied to every upstream request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for talking to the Brave Search API.
///
/// Only the API key is required; everything else has a default that matches
/// the public API. Use the `with_*` methods to adjust individual settings.
#[derive(Clone)]
pub struct BraveConfig {
    /// Subscription token sent as `X-Subscription-Token`
    pub api_key: String,
    /// API root, without a trailing slash
    pub base_url: String,
    /// Timeout for each HTTP request
    pub timeout: Duration,
    /// Quotas enforced before any request leaves the process
    pub limits: RateLimits,
}

impl std::fmt::Debug for BraveConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BraveConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("limits", &self.limits)
            .finish()
    }
}

impl BraveConfig {
    /// Create a configuration with the given API key and default settings.
    ///
    /// # Errors
    /// Returns [`SearchError::Config`] if the key is empty or whitespace.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(SearchError::config(format!(
                "{API_KEY_ENV} environment variable is required"
            )));
        }

        Ok(Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            limits: RateLimits::default(),
        })
    }

    /// Load configuration from the process environment.
    ///
    /// Reads [`API_KEY_ENV`] (required) plus the optional base URL and rate
    /// limit overrides.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV).unwrap_or_default();
        let mut config = Self::new(api_key)?;

        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            config = config.with_base_url(base_url);
        }
        if let Some(per_second) = parse_env_u32(PER_SECOND_ENV)? {
            config.limits.per_second = per_second;
        }
        if let Some(per_month) = parse_env_u32(PER_MONTH_ENV)? {
            config.limits.per_month = per_month;
        }

        tracing::debug!("Loaded Brave configuration: {:?}", config);
        Ok(config)
    }

    /// Set the API root (builder style)
    pub fn with_base_url(self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, ..self }
    }

    /// Set the per-request timeout (builder style)
    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self { timeout, ..self }
    }

    /// Set the rate limits (builder style)
    pub fn with_limits(self, limits: RateLimits) -> Self {
        Self { limits, ..self }
    }

    /// Full URL for an endpoint path such as `web/search`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn parse_env_u32(name: &str) -> Result<Option<u32>> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(|e| SearchError::config(format!("{name} must be a non-negative integer: {e}"))),
        Err(_) => Ok(None),
    }
}
