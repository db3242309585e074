//! End-to-end export pipeline: fetch, normalize, assemble, render, upload.
//!
//! [`Exporter`] owns one client per upstream service and runs the whole
//! pipeline for one creator at a time. Assembly itself is pure; all I/O
//! happens at the edges (analytics/content fetch before, upload after).

pub mod error;
pub mod storage;
pub mod xlsx;

use chrono::Utc;

use anex_core::{AppConfig, Language, Originator, Platform, ReportContext};
use anex_platforms::{AnalyticsClient, ClientConfig, ContentClient};
use anex_report::{assemble, SheetRequestFlags};

pub use error::ExportError;
pub use storage::{export_file_name, StorageClient};

/// One export request, fully resolved (tags already parsed).
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub platform: Platform,
    pub language: Language,
    pub originator: Originator,
    pub user_id: i64,
    /// Partnership content record to pull campaign metadata from, if any.
    pub content_id: Option<i64>,
    pub sheets: SheetRequestFlags,
}

/// Result of one export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The report was rendered and uploaded; `url` retrieves it.
    Uploaded { url: String },
    /// The analytics service had no data for the creator; nothing was
    /// rendered or uploaded.
    NoData,
}

/// Owns the upstream clients and runs export requests.
pub struct Exporter {
    instagram: AnalyticsClient,
    tiktok: AnalyticsClient,
    content: ContentClient,
    storage: StorageClient,
}

impl Exporter {
    /// Builds all clients from the application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Platform`] or [`ExportError::InvalidBaseUrl`]
    /// if a client cannot be constructed from the configured base URLs.
    pub fn from_config(cfg: &AppConfig) -> Result<Self, ExportError> {
        let client_cfg = ClientConfig::from(cfg);
        Ok(Self {
            instagram: AnalyticsClient::new(
                Platform::Instagram,
                &cfg.instagram_base_url,
                client_cfg,
            )?,
            tiktok: AnalyticsClient::new(Platform::Tiktok, &cfg.tiktok_base_url, client_cfg)?,
            content: ContentClient::new(&cfg.content_base_url, client_cfg)?,
            storage: StorageClient::new(
                &cfg.storage_base_url,
                cfg.storage_cdn_base_url.as_deref(),
                client_cfg,
            )?,
        })
    }

    /// Runs one export end to end.
    ///
    /// Fetches the creator's analytics (no data short-circuits to
    /// [`ExportOutcome::NoData`]), pulls campaign metadata when the request
    /// references a partnership content record, assembles the requested
    /// sheets, renders them to XLSX and uploads the result. A sheet-build
    /// failure aborts before anything is uploaded.
    ///
    /// # Errors
    ///
    /// Any provider, assembly, rendering or upload failure; see
    /// [`ExportError`].
    pub async fn run_export(&self, request: &ExportRequest) -> Result<ExportOutcome, ExportError> {
        tracing::info!(
            platform = %request.platform,
            language = %request.language,
            originator = %request.originator,
            user_id = request.user_id,
            "starting export"
        );

        let analytics = match request.platform {
            Platform::Instagram => &self.instagram,
            Platform::Tiktok => &self.tiktok,
        };
        let Some(raw) = analytics.fetch_analytics(request.user_id).await? else {
            return Ok(ExportOutcome::NoData);
        };

        let request_record = match request.content_id {
            Some(content_id) => self.content.fetch_partnership_content(content_id).await?,
            None => None,
        };

        let payload = anex_platforms::normalize_analytics(raw, request_record);
        let ctx = ReportContext::derive(
            request.platform,
            request.language,
            request.originator,
            &payload,
        );

        let document = assemble(&payload, &ctx, &request.sheets)?;
        let bytes = xlsx::render(&document)?;
        let file_name = export_file_name(request.platform, Utc::now());
        let url = self.storage.upload(bytes, &file_name).await?;

        Ok(ExportOutcome::Uploaded { url })
    }
}
