//! Profile sheet: exactly one row of context-derived identity and locale
//! fields.

use anex_core::{AnalyticsPayload, ReportContext};

use crate::columns::{ColumnKey, ColumnSet};
use crate::document::{Sheet, SheetKind};
use crate::error::ReportError;
use crate::project::{CellSource, CellValue};

use super::{new_sheet, push_record, unexpected_column};

/// Builds the Profile sheet.
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
    let mut sheet = new_sheet(SheetKind::Profile, ctx, columns);

    push_record(&mut sheet, ctx, |column| {
        let value = match column.key {
            ColumnKey::FullName => CellValue::text(ctx.full_name.clone()),
            ColumnKey::UserName => CellValue::text(ctx.user_name.clone()),
            ColumnKey::Followers => CellValue::opt_number(payload.profile.followers),
            ColumnKey::Currency => CellValue::text(ctx.currency_code.clone()),
            _ => return Err(unexpected_column(SheetKind::Profile, column)),
        };
        Ok(CellSource::Scalar(value))
    })?;

    Ok(sheet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::columns_for;
    use crate::sheets::testutil::english_client_context;
    use anex_core::ProfileInfo;

    #[test]
    fn exactly_one_row_from_context() {
        let ctx = english_client_context();
        let payload = AnalyticsPayload {
            profile: ProfileInfo {
                full_name: Some("Ada Lovelace".to_string()),
                user_name: Some("ada".to_string()),
                followers: Some(15234.0),
            },
            ..AnalyticsPayload::default()
        };
        let columns = columns_for(SheetKind::Profile, &ctx);
        let sheet = build(&payload, &ctx, &columns).unwrap();

        assert_eq!(sheet.rows.len(), 1);
        assert_eq!(sheet.rows[0], vec!["Ada Lovelace", "ada", "15234.00", "USD"]);
    }

    #[test]
    fn missing_followers_renders_placeholder() {
        let ctx = english_client_context();
        let columns = columns_for(SheetKind::Profile, &ctx);
        let sheet = build(&AnalyticsPayload::default(), &ctx, &columns).unwrap();
        assert_eq!(sheet.rows[0][2], "NA");
    }
}
