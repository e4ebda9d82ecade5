use brave_search_api::{BraveConfig, RateLimits, SearchService};
use brave_search_mcp::tools::{
    local_search::{LocalSearchRequest, local_search},
    web_search::{WebSearchRequest, web_search},
};
use brave_search_mcp::{BraveSearchMcpServer, ServerConfig};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service_for(server: &MockServer, limits: RateLimits) -> SearchService {
    let config = BraveConfig::new("test_api_key")
        .unwrap()
        .with_base_url(server.uri())
        .with_limits(limits);
    SearchService::from_config(config).unwrap()
}

fn web_request(query: &str) -> WebSearchRequest {
    WebSearchRequest {
        query: Some(query.to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_web_search_tool_returns_formatted_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/web/search"))
        .and(query_param("count", "10"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "web": { "results": [
                { "title": "Sample Title 1", "description": "Sample Description 1", "url": "https://example.com/1" },
                { "title": "Sample Title 2", "description": "Sample Description 2", "url": "https://example.com/2" }
            ] }
        })))
        .mount(&server)
        .await;

    let service = service_for(&server, RateLimits::default());
    let text = web_search(&service, web_request("python programming")).await;

    assert!(text.starts_with("Title: Sample Title 1"));
    assert!(text.contains("Sample Title 2"));
}

#[tokio::test]
async fn test_web_search_tool_clamps_large_count() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/web/search"))
        .and(query_param("count", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "web": { "results": [] } })))
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server, RateLimits::default());
    let request = WebSearchRequest {
        count: Some(500),
        ..web_request("anything")
    };

    assert_eq!(web_search(&service, request).await, "");
}

#[tokio::test]
async fn test_upstream_error_becomes_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid token"))
        .mount(&server)
        .await;

    let service = service_for(&server, RateLimits::default());
    let text = web_search(&service, web_request("test query")).await;

    assert_eq!(text, "Error: Brave API error: 401 Unauthorized\ninvalid token");
}

#[tokio::test]
async fn test_rate_limit_error_becomes_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let service = service_for(&server, RateLimits::new(1, 15_000));
    web_search(&service, web_request("first")).await;
    let text = web_search(&service, web_request("second")).await;

    assert_eq!(text, "Error: Rate limit exceeded");
}

#[tokio::test]
async fn test_local_search_tool() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/web/search"))
        .and(query_param("result_filter", "locations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "locations": { "results": [ { "id": "loc1" } ] }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/local/pois"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [ {
                "id": "loc1",
                "name": "Cafe Uno",
                "address": { "streetAddress": "1 First Ave", "addressLocality": "Springfield" },
                "rating": { "ratingValue": 4, "ratingCount": 12 }
            } ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/local/descriptions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "descriptions": {} })))
        .mount(&server)
        .await;

    let service = service_for(&server, RateLimits::new(3, 15_000));
    let text = local_search(
        &service,
        LocalSearchRequest {
            query: Some("cafes near me".into()),
            count: None,
        },
    )
    .await;

    assert_eq!(
        text,
        "Name: Cafe Uno\n\
        Address: 1 First Ave, Springfield\n\
        Phone: N/A\n\
        Rating: 4 (12 reviews)\n\
        Price Range: N/A\n\
        Hours: N/A\n\
        Description: No description available"
    );
}

#[tokio::test]
async fn test_negative_arguments_are_bounded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/web/search"))
        .and(query_param("q", "rust"))
        .and(query_param("count", "0"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "web": { "results": [] } })))
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server, RateLimits::default());
    let request: WebSearchRequest =
        serde_json::from_value(json!({ "query": "rust", "count": -1, "offset": -2 })).unwrap();

    assert_eq!(web_search(&service, request).await, "");
}

#[tokio::test]
async fn test_missing_query_searches_for_empty_string() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/web/search"))
        .and(query_param("q", ""))
        .and(query_param("count", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(2)
        .mount(&server)
        .await;

    let service = service_for(&server, RateLimits::new(5, 15_000));
    let request: LocalSearchRequest = serde_json::from_value(json!({ "count": 3 })).unwrap();

    // No locations, so the local tool falls back to an empty web search
    assert_eq!(local_search(&service, request).await, "");
}

#[tokio::test]
async fn test_null_description_is_rendered_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/web/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "web": { "results": [
                { "title": "T", "description": null, "url": "https://example.com" }
            ] }
        })))
        .mount(&server)
        .await;

    let service = service_for(&server, RateLimits::default());
    let text = web_search(&service, web_request("anything")).await;

    assert_eq!(text, "Title: T\nDescription: \nURL: https://example.com");
}

#[test]
fn test_server_construction() {
    let brave = BraveConfig::new("test_api_key").unwrap();
    let server = BraveSearchMcpServer::new(ServerConfig::new(brave));
    assert!(server.is_ok());
}
