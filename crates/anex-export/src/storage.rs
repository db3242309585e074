//! Upload client for the blob storage gateway.

use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::Rng;
use reqwest::{Client, Url};

use anex_core::Platform;
use anex_platforms::ClientConfig;

use crate::error::ExportError;

const USER_AGENT: &str = "anex/0.1 (analytics-export)";

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Client for the blob storage gateway. Uploads go to the gateway base URL;
/// when a CDN base URL is configured, the returned download URL is rewritten
/// onto it.
pub struct StorageClient {
    client: Client,
    base_url: Url,
    cdn_base_url: Option<Url>,
}

impl StorageClient {
    /// Creates a client pointed at `base_url`, optionally rewriting download
    /// URLs onto `cdn_base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ExportError::InvalidBaseUrl`] if either
    /// URL is not valid.
    pub fn new(
        base_url: &str,
        cdn_base_url: Option<&str>,
        cfg: ClientConfig,
    ) -> Result<Self, ExportError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(USER_AGENT)
            .build()
            .map_err(ExportError::Http)?;

        Ok(Self {
            client,
            base_url: parse_base(base_url)?,
            cdn_base_url: cdn_base_url.map(parse_base).transpose()?,
        })
    }

    /// Uploads `bytes` under `file_name` and returns the URL the document
    /// can be retrieved from.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Http`] on network failure and
    /// [`ExportError::UploadRejected`] on a non-2xx gateway response.
    pub async fn upload(&self, bytes: Vec<u8>, file_name: &str) -> Result<String, ExportError> {
        let url = self.object_url(&self.base_url, file_name)?;
        let response = self
            .client
            .put(url.clone())
            .header(reqwest::header::CONTENT_TYPE, XLSX_CONTENT_TYPE)
            .body(bytes)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExportError::UploadRejected {
                file_name: file_name.to_owned(),
                status: status.as_u16(),
            });
        }

        let download_url = match &self.cdn_base_url {
            Some(cdn) => self.object_url(cdn, file_name)?,
            None => url,
        };
        tracing::info!(file_name, url = %download_url, "uploaded report");
        Ok(download_url.into())
    }

    fn object_url(&self, base: &Url, file_name: &str) -> Result<Url, ExportError> {
        base.join(file_name).map_err(|e| ExportError::InvalidBaseUrl {
            url: base.to_string(),
            reason: e.to_string(),
        })
    }
}

fn parse_base(base_url: &str) -> Result<Url, ExportError> {
    let normalised = format!("{}/", base_url.trim_end_matches('/'));
    Url::parse(&normalised).map_err(|e| ExportError::InvalidBaseUrl {
        url: base_url.to_owned(),
        reason: e.to_string(),
    })
}

/// Builds the timestamped, salted file name for one export, e.g.
/// `analytics_instagram_05_03_2026_9_14_2_731.xlsx`.
///
/// The salt keeps two exports for the same creator in the same second from
/// overwriting each other.
#[must_use]
pub fn export_file_name(platform: Platform, now: DateTime<Utc>) -> String {
    let salt = rand::rng().random_range(1..=1000);
    file_name_with_salt(platform, now, salt)
}

fn file_name_with_salt(platform: Platform, now: DateTime<Utc>, salt: u32) -> String {
    format!(
        "analytics_{platform}_{}_{salt}.xlsx",
        now.format("%d_%m_%Y_%-H_%-M_%-S")
    )
}
