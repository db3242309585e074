//! Integration tests for the platform clients using wiremock HTTP mocks.

use anex_core::Platform;
use anex_platforms::{AnalyticsClient, ClientConfig, ContentClient, PlatformError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config() -> ClientConfig {
    ClientConfig {
        timeout_secs: 5,
        max_retries: 0,
        retry_backoff_base_ms: 0,
    }
}

fn analytics_client(platform: Platform, base_url: &str) -> AnalyticsClient {
    AnalyticsClient::new(platform, base_url, test_config())
        .expect("client construction should not fail")
}

fn content_client(base_url: &str) -> ContentClient {
    ContentClient::new(base_url, test_config()).expect("client construction should not fail")
}

#[tokio::test]
async fn fetch_analytics_returns_parsed_user() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "OK",
        "user": {
            "fullName": "Jane Creator",
            "userName": "jane.creator",
            "followers": 15000.0,
            "country": { "currencySymbol": "€", "currencyCode": "EUR" },
            "metrics": [
                {
                    "period": "Last 30 days",
                    "followers": 15000.0,
                    "engagementRate": 4.57,
                    "avgLikes": 812.3,
                    "avgComments": 44.0,
                    "earnedMediaValue": 1250.5
                }
            ],
            "audience": [
                { "range": "500-1000", "male": 40.0, "female": 60.0 }
            ],
            "trends": {
                "hashtags": ["#dance"],
                "sounds": ["summer beat"],
                "interests": ["fitness"]
            }
        }
    });

    Mock::given(method("GET"))
        .and(path("/analytics"))
        .and(query_param("userId", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = analytics_client(Platform::Tiktok, &server.uri());
    let raw = client
        .fetch_analytics(42)
        .await
        .expect("should parse analytics")
        .expect("user should be present");

    assert_eq!(raw.full_name.as_deref(), Some("Jane Creator"));
    assert_eq!(raw.followers, Some(15000.0));
    assert_eq!(raw.metrics.len(), 1);
    assert_eq!(raw.metrics[0].engagement_rate, Some(4.57));
    assert_eq!(raw.audience.len(), 1);
    assert_eq!(raw.audience[0].range.as_deref(), Some("500-1000"));
    let trends = raw.trends.expect("trends should be present");
    assert_eq!(trends.sounds, vec!["summer beat"]);
    assert!(trends.brands.is_empty());
}

#[tokio::test]
async fn fetch_analytics_null_user_is_no_data() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/analytics"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "status": "OK", "user": null })),
        )
        .mount(&server)
        .await;

    let client = analytics_client(Platform::Instagram, &server.uri());
    let raw = client.fetch_analytics(7).await.expect("should succeed");
    assert!(raw.is_none(), "null user must map to Ok(None)");
}

#[tokio::test]
async fn fetch_analytics_error_envelope_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/analytics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "ERROR",
            "alert": { "message": "user suspended" }
        })))
        .mount(&server)
        .await;

    let client = analytics_client(Platform::Instagram, &server.uri());
    let err = client.fetch_analytics(7).await.unwrap_err();
    assert!(matches!(
        err,
        PlatformError::Api { ref message, .. } if message == "user suspended"
    ));
}

#[tokio::test]
async fn fetch_analytics_retries_server_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/analytics"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/analytics"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "status": "OK", "user": null })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = AnalyticsClient::new(
        Platform::Tiktok,
        &server.uri(),
        ClientConfig {
            timeout_secs: 5,
            max_retries: 2,
            retry_backoff_base_ms: 1,
        },
    )
    .expect("client construction should not fail");

    let raw = client
        .fetch_analytics(42)
        .await
        .expect("should succeed after retry");
    assert!(raw.is_none());
}

#[tokio::test]
async fn fetch_content_returns_request_record() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "OK",
        "content": {
            "campaign": {
                "title": "Summer push",
                "brand": { "title": "Acme" }
            },
            "product": { "name": "Sneaker X" }
        }
    });

    Mock::given(method("GET"))
        .and(path("/content"))
        .and(query_param("contentId", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = content_client(&server.uri());
    let record = client
        .fetch_partnership_content(7)
        .await
        .expect("should parse content")
        .expect("content should be present");

    assert_eq!(record.campaign_title.as_deref(), Some("Summer push"));
    assert_eq!(record.brand_title.as_deref(), Some("Acme"));
    assert_eq!(record.product_name.as_deref(), Some("Sneaker X"));
}

#[tokio::test]
async fn fetch_content_404_is_no_data() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/content"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = content_client(&server.uri());
    let record = client
        .fetch_partnership_content(99)
        .await
        .expect("404 must not be an error");
    assert!(record.is_none());
}
