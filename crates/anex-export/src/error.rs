use thiserror::Error;

use anex_platforms::PlatformError;
use anex_report::ReportError;

/// Errors surfaced by the export pipeline.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A platform or content client failed.
    #[error(transparent)]
    Platform(#[from] PlatformError),

    /// A sheet builder failed during assembly; the variant names the sheet.
    #[error(transparent)]
    Report(#[from] ReportError),

    /// The workbook could not be rendered.
    #[error("XLSX rendering error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// Network or TLS failure talking to the storage gateway.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The storage gateway refused the upload.
    #[error("upload of '{file_name}' rejected with HTTP {status}")]
    UploadRejected { file_name: String, status: u16 },

    /// The configured storage base URL could not be parsed.
    #[error("invalid storage base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
