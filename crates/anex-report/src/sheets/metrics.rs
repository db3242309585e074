//! Metrics sheet: one row per metric period; numeric columns rendered with
//! their configured currency/percentage decoration.

use anex_core::{AnalyticsPayload, MetricRecord, ReportContext};

use crate::columns::{Column, ColumnKey, ColumnSet};
use crate::document::{Sheet, SheetKind};
use crate::error::ReportError;
use crate::project::{CellSource, CellValue};

use super::{new_sheet, push_record, unexpected_column};

/// Builds the Metrics sheet.
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
    let mut sheet = new_sheet(SheetKind::Metrics, ctx, columns);

    for record in &payload.metrics {
        push_record(&mut sheet, ctx, |column| {
            Ok(CellSource::Scalar(metric_value(record, column)?))
        })?;
    }

    Ok(sheet)
}

fn metric_value(record: &MetricRecord, column: &Column) -> Result<CellValue, ReportError> {
    let value = match column.key {
        ColumnKey::Period => CellValue::opt_text(Some(&record.period)),
        ColumnKey::Followers => CellValue::opt_number(record.followers),
        ColumnKey::EngagementRate => CellValue::opt_number(record.engagement_rate),
        ColumnKey::AvgLikes => CellValue::opt_number(record.avg_likes),
        ColumnKey::AvgComments => CellValue::opt_number(record.avg_comments),
        ColumnKey::AvgViews => CellValue::opt_number(record.avg_views),
        ColumnKey::EarnedMediaValue => CellValue::opt_number(record.earned_media_value),
        ColumnKey::SponsoredEngagementRate => {
            CellValue::opt_number(record.sponsored_engagement_rate)
        }
        ColumnKey::EstimatedReach => CellValue::opt_number(record.estimated_reach),
        _ => return Err(unexpected_column(SheetKind::Metrics, column)),
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::columns_for;
    use crate::sheets::testutil::{context, english_client_context};
    use anex_core::{Language, Originator, Platform};

    fn record(period: &str) -> MetricRecord {
        MetricRecord {
            period: period.to_string(),
            followers: Some(15000.0),
            engagement_rate: Some(4.567),
            avg_likes: Some(812.3),
            avg_comments: Some(44.0),
            avg_views: Some(9021.5),
            earned_media_value: Some(1250.5),
            sponsored_engagement_rate: Some(2.0),
            estimated_reach: Some(30000.0),
        }
    }

    #[test]
    fn one_row_per_metric_record_with_decorated_numbers() {
        let ctx = english_client_context();
        let payload = AnalyticsPayload {
            metrics: vec![record("Last 30 days"), record("Last 90 days")],
            ..AnalyticsPayload::default()
        };
        let columns = columns_for(SheetKind::Metrics, &ctx);
        let sheet = build(&payload, &ctx, &columns).unwrap();

        assert_eq!(sheet.rows.len(), 2);
        assert_eq!(
            sheet.rows[0],
            vec![
                "Last 30 days",
                "15000.00",
                "4.57%",
                "812.30",
                "44.00",
                "9021.50",
                "1250.50$",
            ]
        );
    }

    #[test]
    fn missing_numerics_render_quantitative_zero() {
        let ctx = english_client_context();
        let payload = AnalyticsPayload {
            metrics: vec![MetricRecord {
                period: "Last 30 days".to_string(),
                ..MetricRecord::default()
            }],
            ..AnalyticsPayload::default()
        };
        let columns = columns_for(SheetKind::Metrics, &ctx);
        let sheet = build(&payload, &ctx, &columns).unwrap();
        // Zero policy renders the unsigned "0", not "NA" and not "0.00%".
        assert_eq!(
            sheet.rows[0],
            vec!["Last 30 days", "0", "0", "0", "0", "0", "0"]
        );
    }

    #[test]
    fn control_report_includes_sponsored_columns() {
        let ctx = context(Platform::Tiktok, Language::En, Originator::Control);
        let payload = AnalyticsPayload {
            metrics: vec![record("Last 30 days")],
            ..AnalyticsPayload::default()
        };
        let columns = columns_for(SheetKind::Metrics, &ctx);
        let sheet = build(&payload, &ctx, &columns).unwrap();
        assert_eq!(sheet.rows[0].len(), 9);
        assert_eq!(sheet.rows[0][7], "2%");
        assert_eq!(sheet.rows[0][8], "30000.00");
    }
}
