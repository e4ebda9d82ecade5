//! # brave-search-api
//!
//! A small async client for the Brave Search API that produces plain-text
//! results for web and local searches. All outbound calls pass through a shared
//! rate gate before they leave the process.
//!
//! ## Features
//!
//! - **Web Search**: `Title`/`Description`/`URL` blocks, up to 20 results per request
//! - **Local Search**: location ids resolved first, then POI details and
//!   descriptions fetched concurrently and merged
//! - **Fallback**: local searches with no locations return web results instead
//! - **Rate Limiting**: per-second and per-process quotas, checked before every request
//!
//! ## Quick Start
//!
//! ```no_run
//! use brave_search_api::{BraveConfig, SearchService};
//!
//! # async fn example() -> anyhow::Result<()> {
//! // Reads BRAVE_API_KEY from the environment
//! let service = SearchService::from_config(BraveConfig::from_env()?)?;
//!
//! let text = service.local_search_text("pizza near Central Park", 5).await?;
//! println!("{text}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`rate_gate`]: quota tracking shared by every request
//! - [`client`]: the [`SearchBackend`] trait and its HTTP implementation
//! - [`local_search`]: the location → details → merge flow
//! - [`format`]: plain-text rendering
//! - [`service`]: the two operations exposed to callers
//!
//! ```text
//! SearchService → LocalSearch → BraveClient → RateGate → Brave API
//!       ↓                            ↓
//!   format_web                 format_local
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T>`] using [`SearchError`]. Nothing is retried;
//! the first failure is returned to the caller.

pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod local_search;
pub mod rate_gate;
pub mod service;
pub mod types;

// Re-export main types for easy access
pub use client::{BraveClient, MAX_RESULT_COUNT, SearchBackend, clamp_count};
pub use config::BraveConfig;
pub use error::{Result, SearchError};
pub use format::{NO_LOCAL_RESULTS, format_local, format_web};
pub use local_search::LocalSearch;
pub use rate_gate::{Clock, RateGate, RateLimits, RateUsage, SystemClock};
pub use service::{DEFAULT_LOCAL_COUNT, DEFAULT_WEB_COUNT, SearchService};
pub use types::{DescriptionMap, LocationId, PlaceOfInterest, WebResult};
