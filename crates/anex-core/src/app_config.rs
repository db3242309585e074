/// Application configuration resolved from environment variables.
///
/// Base URLs point at the internal analytics/content services and the blob
/// storage gateway; the HTTP knobs are shared by every outbound client.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub instagram_base_url: String,
    pub tiktok_base_url: String,
    pub content_base_url: String,
    pub storage_base_url: String,
    /// Optional CDN host; when set, upload URLs are rewritten onto it.
    pub storage_cdn_base_url: Option<String>,
    pub log_level: String,
    pub http_timeout_secs: u64,
    pub http_max_retries: u32,
    pub http_retry_backoff_base_ms: u64,
}
