//! Trends sheet: platform-conditional columns with fan-out rows per trend
//! entry.
//!
//! The column set arrives already filtered (Instagram drops Top sounds,
//! TikTok drops Top brands), so this builder never checks the platform;
//! it only supplies a series for whichever columns exist.

use anex_core::{AnalyticsPayload, ReportContext};

use crate::columns::{ColumnKey, ColumnSet};
use crate::document::{Sheet, SheetKind};
use crate::error::ReportError;
use crate::project::CellSource;

use super::{new_sheet, push_record, unexpected_column};

/// Builds the Trends sheet.
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
    let mut sheet = new_sheet(SheetKind::Trends, ctx, columns);
    let trends = &payload.trends;

    push_record(&mut sheet, ctx, |column| {
        let series = match column.key {
            ColumnKey::TopHashtags => CellSource::series_of_text(&trends.hashtags),
            ColumnKey::TopSounds => CellSource::series_of_text(&trends.sounds),
            ColumnKey::TopBrands => CellSource::series_of_text(&trends.brands),
            ColumnKey::TopInterests => CellSource::series_of_text(&trends.interests),
            _ => return Err(unexpected_column(SheetKind::Trends, column)),
        };
        Ok(series)
    })?;

    Ok(sheet)
}
