//! Renders an assembled [`Document`] into XLSX bytes.
//!
//! The document is authoritative: every cell is already a formatted string
//! (signs, rounding, NA substitution all happened upstream), so rendering
//! writes plain string cells and only adds workbook chrome, a bold header
//! row per sheet.

use rust_xlsxwriter::{Format, Workbook};

use anex_report::Document;

use crate::error::ExportError;

/// Renders one worksheet per sheet, in document order.
///
/// # Errors
///
/// Returns [`ExportError::Xlsx`] if the workbook cannot be serialized, for
/// example on a duplicate or over-long sheet name.
pub fn render(document: &Document) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    for sheet in document.sheets() {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&sheet.name)?;

        for (col, label) in sheet.columns.labels().iter().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            worksheet.write_string_with_format(0, col as u16, *label, &header_format)?;
        }

        for (row, cells) in sheet.rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                #[allow(clippy::cast_possible_truncation)]
                worksheet.write_string((row + 1) as u32, col as u16, cell)?;
            }
        }
    }

    let bytes = workbook.save_to_buffer()?;
    tracing::debug!(
        sheets = document.sheets().len(),
        bytes = bytes.len(),
        "rendered workbook"
    );
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    use anex_core::{AnalyticsPayload, Language, Originator, Platform, ReportContext};
    use anex_report::{assemble, SheetRequestFlags};

    fn context() -> ReportContext {
        ReportContext::derive(
            Platform::Instagram,
            Language::En,
            Originator::Client,
            &AnalyticsPayload::default(),
        )
    }

    #[test]
    fn empty_document_renders_to_valid_workbook() {
        let document = assemble(
            &AnalyticsPayload::default(),
            &context(),
            &SheetRequestFlags::none(),
        )
        .expect("empty assembly should succeed");
        let bytes = render(&document).expect("render should succeed");
        // XLSX files are zip archives; check the magic bytes.
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn all_sheets_render() {
        let document = assemble(
            &AnalyticsPayload::default(),
            &context(),
            &SheetRequestFlags::all(),
        )
        .expect("assembly should succeed");
        assert_eq!(document.sheets().len(), 5);
        let bytes = render(&document).expect("render should succeed");
        assert!(!bytes.is_empty());
    }
}
