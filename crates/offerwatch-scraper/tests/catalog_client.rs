//! Integration tests for `CatalogClient::fetch_catalog`.
//!
//! Uses `wiremock` to stand up a local HTTP server per test so no real
//! network traffic is made. Covers the happy paths (empty and populated
//! lists), header behavior, every error variant, and the retry policy.

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use offerwatch_scraper::{CatalogClient, FetchError};

const REFERER: &str = "https://shop.test/vehicles";

/// Client suitable for most tests: 5-second timeout, no retries.
fn test_client() -> CatalogClient {
    CatalogClient::new(5, "offerwatch-test/0.1", 0, 0).expect("failed to build test CatalogClient")
}

/// Client with retries enabled and zero backoff so tests do not sleep.
fn test_client_with_retries(max_retries: u32) -> CatalogClient {
    CatalogClient::new(5, "offerwatch-test/0.1", max_retries, 0)
        .expect("failed to build test CatalogClient")
}

fn catalog_url(server: &MockServer) -> String {
    format!("{}/api/product/list", server.uri())
}

/// Catalog body with a single featured record.
fn one_record_body() -> serde_json::Value {
    json!({
        "data": {
            "list": [{
                "categories": "featured,vehicles",
                "name": "IS-2",
                "price": "8800",
                "nonselling_time": "2024-01-05T10:00:00",
                "package_content": null
            }]
        }
    })
}

#[tokio::test]
async fn fetch_catalog_returns_empty_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/product/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({"data": {"list": []}})))
        .mount(&server)
        .await;

    let result = test_client().fetch_catalog(&catalog_url(&server), REFERER).await;
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    assert!(result.unwrap().is_empty());
}

#[tokio::test]
async fn fetch_catalog_decodes_records() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/product/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&one_record_body()))
        .mount(&server)
        .await;

    let records = test_client()
        .fetch_catalog(&catalog_url(&server), REFERER)
        .await
        .expect("fetch should succeed");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name.as_deref(), Some("IS-2"));
    assert_eq!(records[0].price.as_deref(), Some("8800"));
    assert_eq!(
        records[0].nonselling_time.as_deref(),
        Some("2024-01-05T10:00:00")
    );
}

#[tokio::test]
async fn fetch_catalog_sends_configured_referer() {
    let server = MockServer::start().await;

    // The mock only matches requests carrying the referer; a missing
    // header falls through to wiremock's default 404.
    Mock::given(method("GET"))
        .and(path("/api/product/list"))
        .and(header("Referer", REFERER))
        .respond_with(ResponseTemplate::new(200).set_body_json(&one_record_body()))
        .mount(&server)
        .await;

    let result = test_client().fetch_catalog(&catalog_url(&server), REFERER).await;
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
}

#[tokio::test]
async fn fetch_catalog_maps_client_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/product/list"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let result = test_client().fetch_catalog(&catalog_url(&server), REFERER).await;
    match result.unwrap_err() {
        FetchError::UnexpectedStatus { status, .. } => assert_eq!(status, 403),
        other => panic!("expected FetchError::UnexpectedStatus, got: {other:?}"),
    }
}

#[tokio::test]
async fn fetch_catalog_maps_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/product/list"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let result = test_client().fetch_catalog(&catalog_url(&server), REFERER).await;
    assert!(
        matches!(result.unwrap_err(), FetchError::Deserialize { .. }),
        "expected FetchError::Deserialize"
    );
}

#[tokio::test]
async fn fetch_catalog_retries_5xx_then_succeeds() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/product/list"))
        .respond_with(ResponseTemplate::new(502))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/product/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&one_record_body()))
        .mount(&server)
        .await;

    let records = test_client_with_retries(1)
        .fetch_catalog(&catalog_url(&server), REFERER)
        .await
        .expect("fetch should succeed after retry");
    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn fetch_catalog_returns_error_after_exhausting_retries() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/product/list"))
        .respond_with(ResponseTemplate::new(503))
        .expect(2) // 1 initial + 1 retry
        .mount(&server)
        .await;

    let result = test_client_with_retries(1)
        .fetch_catalog(&catalog_url(&server), REFERER)
        .await;
    assert!(
        matches!(
            result,
            Err(FetchError::UnexpectedStatus { status: 503, .. })
        ),
        "expected UnexpectedStatus(503) after retry exhaustion, got: {result:?}"
    );
}

#[tokio::test]
async fn fetch_catalog_does_not_retry_4xx() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/product/list"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let result = test_client_with_retries(3)
        .fetch_catalog(&catalog_url(&server), REFERER)
        .await;
    assert!(matches!(
        result,
        Err(FetchError::UnexpectedStatus { status: 404, .. })
    ));
}
