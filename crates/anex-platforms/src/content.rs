//! HTTP client for the partnership-content service.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};

use anex_core::RequestRecord;

use crate::error::PlatformError;
use crate::normalize::normalize_content;
use crate::retry::RetryPolicy;
use crate::types::ContentResponse;
use crate::ClientConfig;

const USER_AGENT: &str = "anex/0.1 (analytics-export)";

/// Client for the partnership-content service.
pub struct ContentClient {
    client: Client,
    endpoint: Url,
    retry: RetryPolicy,
}

impl ContentClient {
    /// Creates a client pointed at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlatformError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn new(base_url: &str, cfg: ClientConfig) -> Result<Self, PlatformError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(USER_AGENT)
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let endpoint = Url::parse(&normalised)
            .and_then(|base| base.join("content"))
            .map_err(|e| PlatformError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            endpoint,
            retry: RetryPolicy::new(&cfg),
        })
    }

    /// Fetches the campaign/brand/product titles for one partnership
    /// content record.
    ///
    /// Returns `Ok(None)` when the record does not exist (HTTP 404) or the
    /// service reports no content for the id; the export then simply has no
    /// request rows.
    ///
    /// # Errors
    ///
    /// - [`PlatformError::Api`] if the service returns an error status.
    /// - [`PlatformError::Http`] on network failure or non-2xx, non-404
    ///   HTTP status.
    /// - [`PlatformError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn fetch_partnership_content(
        &self,
        content_id: i64,
    ) -> Result<Option<RequestRecord>, PlatformError> {
        let url = self.content_url(content_id);
        let body = self.retry.run(|| self.request_json(&url)).await?;
        let Some(body) = body else {
            tracing::info!(content_id, "content service returned 404, no request data");
            return Ok(None);
        };
        self.check_api_error(&body)?;

        let envelope: ContentResponse =
            serde_json::from_value(body).map_err(|e| PlatformError::Deserialize {
                context: format!("getContent(contentId={content_id})"),
                source: e,
            })?;

        Ok(envelope.content.map(|raw| normalize_content(&raw)))
    }

    fn content_url(&self, content_id: i64) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("contentId", &content_id.to_string());
        url
    }

    /// Sends a GET request and parses the body as JSON. A 404 maps to
    /// `Ok(None)`; any other non-2xx status is an error.
    async fn request_json(&self, url: &Url) -> Result<Option<serde_json::Value>, PlatformError> {
        let response = self.client.get(url.clone()).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body)
            .map(Some)
            .map_err(|e| PlatformError::Deserialize {
                context: url.to_string(),
                source: e,
            })
    }

    fn check_api_error(&self, body: &serde_json::Value) -> Result<(), PlatformError> {
        if body.get("status").and_then(serde_json::Value::as_str) == Some("ERROR") {
            let message = body
                .get("alert")
                .and_then(|a| a.get("message"))
                .and_then(serde_json::Value::as_str)
                .unwrap_or("unknown error")
                .to_string();
            return Err(PlatformError::Api {
                service: "partnership content".to_owned(),
                message,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> ContentClient {
        ContentClient::new(
            base_url,
            ClientConfig {
                timeout_secs: 30,
                max_retries: 0,
                retry_backoff_base_ms: 0,
            },
        )
        .expect("client construction should not fail")
    }

    #[test]
    fn content_url_appends_path_and_content_id() {
        let client = test_client("http://content.internal/api");
        let url = client.content_url(7);
        assert_eq!(url.as_str(), "http://content.internal/api/content?contentId=7");
    }

    #[test]
    fn error_envelope_surfaces_alert_message() {
        let client = test_client("http://content.internal");
        let body = serde_json::json!({
            "status": "ERROR",
            "alert": { "message": "content archived" }
        });
        let err = client.check_api_error(&body).unwrap_err();
        assert!(matches!(
            err,
            PlatformError::Api { ref message, .. } if message == "content archived"
        ));
    }
}
