use thiserror::Error;

use crate::document::SheetKind;

/// Errors raised while assembling a report document.
///
/// Formatting anomalies never reach this type; they are resolved locally
/// with NA/zero substitution. A `SheetBuild` error means a builder and its
/// column set disagreed about shape, and it aborts the whole assembly.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to build {kind} sheet: {detail}")]
    SheetBuild { kind: SheetKind, detail: String },
}

impl ReportError {
    pub(crate) fn sheet(kind: SheetKind, detail: impl Into<String>) -> Self {
        ReportError::SheetBuild {
            kind,
            detail: detail.into(),
        }
    }
}
