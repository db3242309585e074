//! HTTP clients for the upstream platform services.
//!
//! Each export talks to up to two services: the analytics service for the
//! requested platform (Instagram or TikTok) and, when the request references
//! a partnership content record, the content service for campaign metadata.
//! Wire shapes live in [`types`]; [`normalize`] flattens them into the
//! shared [`anex_core::AnalyticsPayload`].

pub mod analytics;
pub mod content;
pub mod error;
pub mod normalize;
pub(crate) mod retry;
pub mod types;

pub use analytics::AnalyticsClient;
pub use content::ContentClient;
pub use error::PlatformError;
pub use normalize::{normalize_analytics, normalize_content};

/// Connection settings shared by the platform clients.
#[derive(Debug, Clone, Copy)]
pub struct ClientConfig {
    pub timeout_secs: u64,
    pub max_retries: u32,
    pub retry_backoff_base_ms: u64,
}

impl From<&anex_core::AppConfig> for ClientConfig {
    fn from(cfg: &anex_core::AppConfig) -> Self {
        Self {
            timeout_secs: cfg.http_timeout_secs,
            max_retries: cfg.http_max_retries,
            retry_backoff_base_ms: cfg.http_retry_backoff_base_ms,
        }
    }
}
