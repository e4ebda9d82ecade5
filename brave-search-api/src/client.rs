//! HTTP client for the Brave Search API

use crate::config::BraveConfig;
use crate::error::{Result, SearchError};
use crate::rate_gate::RateGate;
use crate::types::{
    DescriptionMap, DescriptionResponse, LocationId, PlaceOfInterest, PoiResponse, WebResult,
    WebSearchResponse,
};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, header};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Upper bound on `count` accepted by the web search endpoint
pub const MAX_RESULT_COUNT: u32 = 20;

const WEB_SEARCH_PATH: &str = "web/search";
const POIS_PATH: &str = "local/pois";
const DESCRIPTIONS_PATH: &str = "local/descriptions";
const SUBSCRIPTION_TOKEN: &str = "X-Subscription-Token";

/// Clamp a requested result count to what the API accepts
pub fn clamp_count(count: u32) -> u32 {
    count.min(MAX_RESULT_COUNT)
}

/// The upstream calls a search needs.
///
/// Each call consumes one rate-limit slot before anything is sent.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Plain web search
    async fn web_search(&self, query: &str, count: u32, offset: u32) -> Result<Vec<WebResult>>;

    /// Web search restricted to locations, returning only their ids
    async fn location_ids(&self, query: &str, count: u32) -> Result<Vec<LocationId>>;

    /// Details for the given locations
    async fn poi_lookup(&self, ids: &[LocationId]) -> Result<Vec<PlaceOfInterest>>;

    /// Free-text descriptions for the given locations
    async fn description_lookup(&self, ids: &[LocationId]) -> Result<DescriptionMap>;
}

/// [`SearchBackend`] talking to the real API over HTTPS
pub struct BraveClient {
    http: Client,
    config: BraveConfig,
    gate: Arc<RateGate>,
}

impl BraveClient {
    /// Build a client with its own HTTP connection pool.
    ///
    /// # Errors
    /// Fails if the TLS backend cannot be initialised.
    pub fn new(config: BraveConfig, gate: Arc<RateGate>) -> Result<Self> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config, gate })
    }

    /// Admit, send a GET with the auth headers, and decode a 200 JSON body.
    ///
    /// `Accept-Encoding: gzip` is added by reqwest's `gzip` feature, which also
    /// decompresses the response.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        self.gate.admit()?;

        let url = self.config.endpoint(path);
        tracing::debug!("GET {} with {} parameters", url, params.len());

        let response = self
            .http
            .get(&url)
            .query(params)
            .header(header::ACCEPT, "application/json")
            .header(SUBSCRIPTION_TOKEN, &self.config.api_key)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            tracing::warn!("Brave API returned {} for {}", status, path);
            return Err(SearchError::upstream(status, body));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// Repeat the `ids` parameter once per non-empty id
fn id_params(ids: &[LocationId]) -> Vec<(&'static str, String)> {
    ids.iter()
        .filter(|id| !id.is_empty())
        .map(|id| ("ids", id.clone()))
        .collect()
}

#[async_trait]
impl SearchBackend for BraveClient {
    async fn web_search(&self, query: &str, count: u32, offset: u32) -> Result<Vec<WebResult>> {
        let params = [
            ("q", query.to_string()),
            ("count", clamp_count(count).to_string()),
            ("offset", offset.to_string()),
        ];

        let response: WebSearchResponse = self.get_json(WEB_SEARCH_PATH, &params).await?;
        let results = response.into_web_results();
        tracing::debug!("Web search returned {} results", results.len());
        Ok(results)
    }

    async fn location_ids(&self, query: &str, count: u32) -> Result<Vec<LocationId>> {
        let params = [
            ("q", query.to_string()),
            ("search_lang", "en".to_string()),
            ("result_filter", "locations".to_string()),
            ("count", clamp_count(count).to_string()),
        ];

        let response: WebSearchResponse = self.get_json(WEB_SEARCH_PATH, &params).await?;
        let ids = response.location_ids();
        tracing::debug!("Location query returned {} ids", ids.len());
        Ok(ids)
    }

    async fn poi_lookup(&self, ids: &[LocationId]) -> Result<Vec<PlaceOfInterest>> {
        let response: PoiResponse = self.get_json(POIS_PATH, &id_params(ids)).await?;
        Ok(response.results)
    }

    async fn description_lookup(&self, ids: &[LocationId]) -> Result<DescriptionMap> {
        let response: DescriptionResponse =
            self.get_json(DESCRIPTIONS_PATH, &id_params(ids)).await?;
        Ok(response.into_map())
    }
}

impl std::fmt::Debug for BraveClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BraveClient")
            .field("config", &self.config)
            .field("gate", &self.gate)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rate_gate::RateLimits;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, limits: RateLimits) -> BraveClient {
        let config = BraveConfig::new("test_api_key")
            .unwrap()
            .with_base_url(server.uri())
            .with_limits(limits);
        let gate = Arc::new(RateGate::new(limits));
        BraveClient::new(config, gate).unwrap()
    }

    fn relaxed() -> RateLimits {
        RateLimits::new(100, 100)
    }

    #[test]
    fn test_clamp_count() {
        assert_eq!(clamp_count(5), 5);
        assert_eq!(clamp_count(20), 20);
        assert_eq!(clamp_count(21), 20);
        assert_eq!(clamp_count(u32::MAX), 20);
    }

    #[test]
    fn test_id_params_skip_empty() {
        let ids = vec!["a".to_string(), String::new(), "b".to_string()];
        assert_eq!(
            id_params(&ids),
            vec![("ids", "a".to_string()), ("ids", "b".to_string())]
        );
    }

    #[tokio::test]
    async fn test_web_search_sends_headers_and_clamps_count() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/web/search"))
            .and(query_param("q", "rust async"))
            .and(query_param("count", "20"))
            .and(query_param("offset", "3"))
            .and(header("X-Subscription-Token", "test_api_key"))
            .and(header("Accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "web": { "results": [
                    { "title": "Sample Title 1", "description": "Sample Description 1", "url": "https://example.com/1" }
                ] }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, relaxed());
        let results = client.web_search("rust async", 50, 3).await.unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Sample Title 1");
    }

    #[tokio::test]
    async fn test_location_ids_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/web/search"))
            .and(query_param("result_filter", "locations"))
            .and(query_param("search_lang", "en"))
            .and(query_param("count", "5"))
            .and(query_param_is_missing("offset"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "locations": { "results": [ { "id": "loc1" }, { "id": "" }, { "id": "loc2" } ] }
            })))
            .mount(&server)
            .await;

        let client = client_for(&server, relaxed());
        let ids = client.location_ids("pizza", 5).await.unwrap();

        assert_eq!(ids, vec!["loc1", "loc2"]);
    }

    #[tokio::test]
    async fn test_poi_lookup_repeats_ids_parameter() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/local/pois"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [ { "id": "loc1", "name": "Restaurant 1" } ]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server, relaxed());
        let ids = vec!["loc1".to_string(), String::new(), "loc2".to_string()];
        let pois = client.poi_lookup(&ids).await.unwrap();
        assert_eq!(pois.len(), 1);

        let requests = server.received_requests().await.unwrap();
        let sent: Vec<(String, String)> = requests[0]
            .url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            sent,
            vec![
                ("ids".to_string(), "loc1".to_string()),
                ("ids".to_string(), "loc2".to_string())
            ]
        );
    }

    #[tokio::test]
    async fn test_description_lookup() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/local/descriptions"))
            .and(query_param("ids", "loc1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "descriptions": { "loc1": "A great place to eat." }
            })))
            .mount(&server)
            .await;

        let client = client_for(&server, relaxed());
        let map = client
            .description_lookup(&["loc1".to_string()])
            .await
            .unwrap();

        assert_eq!(map.get("loc1").map(String::as_str), Some("A great place to eat."));
    }

    #[tokio::test]
    async fn test_non_200_is_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(422).set_body_string("bad query"))
            .mount(&server)
            .await;

        let client = client_for(&server, relaxed());
        let err = client.web_search("x", 10, 0).await.unwrap_err();

        match &err {
            SearchError::Upstream {
                status,
                reason,
                body,
            } => {
                assert_eq!(*status, 422);
                assert_eq!(reason, "Unprocessable Entity");
                assert_eq!(body, "bad query");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(
            err.to_string(),
            "Brave API error: 422 Unprocessable Entity\nbad query"
        );
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = client_for(&server, relaxed());
        let err = client.web_search("x", 10, 0).await.unwrap_err();
        assert!(matches!(err, SearchError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_rate_limit_blocks_before_network() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, RateLimits::new(1, 100));
        client.web_search("first", 10, 0).await.unwrap();
        let err = client.web_search("second", 10, 0).await.unwrap_err();

        assert!(err.is_rate_limited());
        assert_eq!(err.to_string(), "Rate limit exceeded");
    }
}
