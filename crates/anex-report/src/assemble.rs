//! Report assembly: fan-out to the sheet builders in canonical order.

use anex_core::{AnalyticsPayload, ReportContext};

use crate::columns::columns_for;
use crate::document::{Document, Sheet, SheetKind, SheetRequestFlags, SHEET_ORDER};
use crate::error::ReportError;
use crate::sheets;

/// Assembles the requested sheets into a document.
///
/// Sheets are built and appended in [`SHEET_ORDER`] no matter which flags
/// are set; an empty flag set yields an empty (still valid) document. The
/// first builder failure aborts the whole assembly; no partial document is
/// ever returned.
///
/// # Errors
///
/// Returns [`ReportError::SheetBuild`] naming the failing sheet kind.
pub fn assemble(
    payload: &AnalyticsPayload,
    ctx: &ReportContext,
    flags: &SheetRequestFlags,
) -> Result<Document, ReportError> {
    let mut document = Document::new();

    for kind in SHEET_ORDER {
        if !flags.is_set(kind) {
            continue;
        }
        let sheet = build_sheet(kind, payload, ctx)?;
        tracing::debug!(
            sheet = %kind,
            rows = sheet.rows.len(),
            columns = sheet.columns.len(),
            "sheet built"
        );
        document.push(sheet);
    }

    tracing::info!(
        platform = %ctx.platform,
        language = %ctx.language,
        sheets = document.len(),
        "report assembled"
    );
    Ok(document)
}

fn build_sheet(
    kind: SheetKind,
    payload: &AnalyticsPayload,
    ctx: &ReportContext,
) -> Result<Sheet, ReportError> {
    let columns = columns_for(kind, ctx);
    match kind {
        SheetKind::Request => sheets::request::build(payload, ctx, &columns),
        SheetKind::Profile => sheets::profile::build(payload, ctx, &columns),
        SheetKind::Metrics => sheets::metrics::build(payload, ctx, &columns),
        SheetKind::Audience => sheets::audience::build(payload, ctx, &columns),
        SheetKind::Trends => sheets::trends::build(payload, ctx, &columns),
    }
}
