//! Request sheet: one row per request-metadata record, scalar fields only.

use anex_core::{AnalyticsPayload, ReportContext};

use crate::columns::{ColumnKey, ColumnSet};
use crate::document::{Sheet, SheetKind};
use crate::error::ReportError;
use crate::project::{CellSource, CellValue};

use super::{new_sheet, push_record, unexpected_column};

/// Builds the Request sheet from the payload's request records.
///
/// # Errors
///
/// Returns [`ReportError::SheetBuild`] if the column set contains a column
/// this builder has no source field for.
pub fn build(
    payload: &AnalyticsPayload,
    ctx: &ReportContext,
    columns: &ColumnSet,
) -> Result<Sheet, ReportError> {
    let mut sheet = new_sheet(SheetKind::Request, ctx, columns);

    for record in &payload.requests {
        push_record(&mut sheet, ctx, |column| {
            let value = match column.key {
                ColumnKey::Campaign => CellValue::opt_text(record.campaign_title.as_deref()),
                ColumnKey::Brand => CellValue::opt_text(record.brand_title.as_deref()),
                ColumnKey::Product => CellValue::opt_text(record.product_name.as_deref()),
                ColumnKey::RequestOriginator => CellValue::text(ctx.originator.as_tag()),
                _ => return Err(unexpected_column(SheetKind::Request, column)),
            };
            Ok(CellSource::Scalar(value))
        })?;
    }

    Ok(sheet)
}
