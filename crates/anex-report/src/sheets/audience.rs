//! Audience sheet: fan-out rows per reachability bucket with the gender
//! split side by side.

use anex_core::{AnalyticsPayload, ReportContext};

use crate::columns::{ColumnKey, ColumnSet};
use crate::document::{Sheet, SheetKind};
use crate::error::ReportError;
use crate::project::{CellSource, CellValue};

use super::{new_sheet, push_record, unexpected_column};

/// Builds the Audience sheet.
///
/// All three columns are series over the same bucket list, so rows stay
/// aligned by bucket index in payload order.
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
    let mut sheet = new_sheet(SheetKind::Audience, ctx, columns);
    let buckets = &payload.audience;

    push_record(&mut sheet, ctx, |column| {
        let series = match column.key {
            ColumnKey::ReachabilityRange => buckets
                .iter()
                .map(|b| CellValue::opt_text(Some(&b.range)))
                .collect(),
            ColumnKey::MaleShare => buckets
                .iter()
                .map(|b| CellValue::opt_number(b.male_share))
                .collect(),
            ColumnKey::FemaleShare => buckets
                .iter()
                .map(|b| CellValue::opt_number(b.female_share))
                .collect(),
            _ => return Err(unexpected_column(SheetKind::Audience, column)),
        };
        Ok(CellSource::Series(series))
    })?;

    Ok(sheet)
}
