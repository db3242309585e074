//! One builder per sheet kind. Builders are independent, pure functions of
//! `(payload, context, columns)`; any subset can run in isolation.

pub mod audience;
pub mod metrics;
pub mod profile;
pub mod request;
pub mod trends;

use anex_core::ReportContext;

use crate::columns::{sheet_title, Column, ColumnSet};
use crate::document::{Sheet, SheetKind};
use crate::error::ReportError;
use crate::format::format_cell;
use crate::project::{project, CellSource};

/// Creates the empty sheet shell with its localized title.
fn new_sheet(kind: SheetKind, ctx: &ReportContext, columns: &ColumnSet) -> Sheet {
    Sheet::new(
        kind,
        sheet_title(kind, ctx.language).to_string(),
        columns.clone(),
    )
}

/// Projects one record into the sheet: resolves a cell source per column,
/// fans out series rows, and renders every cell through the formatter.
///
/// `source_for` maps a column to the record field backing it; a column the
/// builder does not recognize is a registry/builder shape mismatch and
/// aborts the sheet.
fn push_record<F>(
    sheet: &mut Sheet,
    ctx: &ReportContext,
    source_for: F,
) -> Result<(), ReportError>
where
    F: Fn(&Column) -> Result<CellSource, ReportError>,
{
    let sources = sheet
        .columns
        .columns()
        .iter()
        .map(&source_for)
        .collect::<Result<Vec<_>, _>>()?;

    let columns = sheet.columns.clone();
    for row in project(&sources) {
        let rendered = row
            .iter()
            .zip(columns.columns())
            .map(|(value, column)| format_cell(value, column, &ctx.currency_symbol))
            .collect();
        sheet.push_row(rendered);
    }
    Ok(())
}

/// Error for a column the builder has no source field for.
fn unexpected_column(kind: SheetKind, column: &Column) -> ReportError {
    ReportError::sheet(kind, format!("no source field for column {:?}", column.key))
}

#[cfg(test)]
pub(crate) mod testutil {
    use anex_core::{Language, Originator, Platform, ReportContext};

    pub fn context(platform: Platform, language: Language, originator: Originator) -> ReportContext {
        ReportContext {
            platform,
            language,
            originator,
            currency_symbol: "$".to_string(),
            currency_code: "USD".to_string(),
            full_name: "Ada Lovelace".to_string(),
            user_name: "ada".to_string(),
        }
    }

    pub fn english_client_context() -> ReportContext {
        context(Platform::Instagram, Language::En, Originator::Client)
    }
}
