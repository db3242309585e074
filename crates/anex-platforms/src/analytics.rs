//! HTTP client for the per-platform analytics services.
//!
//! Wraps `reqwest` with envelope checking, typed deserialization, and
//! retry-with-backoff for transient failures. One client instance serves
//! one platform; the base URL decides which service it talks to, so the
//! platform is resolved exactly once at construction.

use std::time::Duration;

use reqwest::{Client, Url};

use anex_core::Platform;

use crate::error::PlatformError;
use crate::retry::RetryPolicy;
use crate::types::{AnalyticsResponse, RawAnalytics};
use crate::ClientConfig;

const USER_AGENT: &str = "anex/0.1 (analytics-export)";

/// Client for one platform's analytics service.
pub struct AnalyticsClient {
    client: Client,
    endpoint: Url,
    platform: Platform,
    retry: RetryPolicy,
}

impl AnalyticsClient {
    /// Creates a client for `platform` pointed at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlatformError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn new(platform: Platform, base_url: &str, cfg: ClientConfig) -> Result<Self, PlatformError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(USER_AGENT)
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // join() appends a path segment instead of replacing the last one.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let endpoint = Url::parse(&normalised)
            .and_then(|base| base.join("analytics"))
            .map_err(|e| PlatformError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            endpoint,
            platform,
            retry: RetryPolicy::new(&cfg),
        })
    }

    /// Fetches one creator's analytics.
    ///
    /// Returns `Ok(None)` when the service reports no analytics data for
    /// the user; callers must treat that as "nothing to export", not as a
    /// failure. Transient network/5xx failures are retried with backoff.
    ///
    /// # Errors
    ///
    /// - [`PlatformError::Api`] if the service returns an error status.
    /// - [`PlatformError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlatformError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn fetch_analytics(
        &self,
        user_id: i64,
    ) -> Result<Option<RawAnalytics>, PlatformError> {
        let url = self.analytics_url(user_id);
        let body = self.retry.run(|| self.request_json(&url)).await?;
        self.check_api_error(&body)?;

        let envelope: AnalyticsResponse =
            serde_json::from_value(body).map_err(|e| PlatformError::Deserialize {
                context: format!("getAnalytics(platform={}, userId={user_id})", self.platform),
                source: e,
            })?;

        if envelope.user.is_none() {
            tracing::info!(
                platform = %self.platform,
                user_id,
                "analytics service returned no data"
            );
        }
        Ok(envelope.user)
    }

    fn analytics_url(&self, user_id: i64) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("userId", &user_id.to_string());
        url
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the
    /// response body as JSON.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, PlatformError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| PlatformError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }

    /// Checks the top-level `"status"` field and returns an error if it
    /// indicates failure.
    fn check_api_error(&self, body: &serde_json::Value) -> Result<(), PlatformError> {
        if body.get("status").and_then(serde_json::Value::as_str) == Some("ERROR") {
            let message = body
                .get("alert")
                .and_then(|a| a.get("message"))
                .and_then(serde_json::Value::as_str)
                .unwrap_or("unknown error")
                .to_string();
            return Err(PlatformError::Api {
                service: format!("{} analytics", self.platform),
                message,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> AnalyticsClient {
        AnalyticsClient::new(
            Platform::Instagram,
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
    fn analytics_url_appends_path_and_user_id() {
        let client = test_client("http://analytics.internal/instagram");
        let url = client.analytics_url(42);
        assert_eq!(
            url.as_str(),
            "http://analytics.internal/instagram/analytics?userId=42"
        );
    }

    #[test]
    fn base_url_trailing_slash_is_normalised() {
        let client = test_client("http://analytics.internal/instagram/");
        let url = client.analytics_url(7);
        assert_eq!(
            url.as_str(),
            "http://analytics.internal/instagram/analytics?userId=7"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = AnalyticsClient::new(
            Platform::Tiktok,
            "not a url",
            ClientConfig {
                timeout_secs: 30,
                max_retries: 0,
                retry_backoff_base_ms: 0,
            },
        );
        assert!(matches!(
            result,
            Err(PlatformError::InvalidBaseUrl { ref url, .. }) if url == "not a url"
        ));
    }

    #[test]
    fn error_envelope_surfaces_alert_message() {
        let client = test_client("http://analytics.internal");
        let body = serde_json::json!({
            "status": "ERROR",
            "alert": { "message": "user suspended" }
        });
        let err = client.check_api_error(&body).unwrap_err();
        assert!(matches!(
            err,
            PlatformError::Api { ref message, .. } if message == "user suspended"
        ));
    }
}
