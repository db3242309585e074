//! Locale/currency-aware cell rendering.
//!
//! Formatting is total: invalid or missing input is substituted locally
//! (`"NA"` or the quantitative `"0"`, depending on the column's missing
//! policy) and never aborts a sheet.

use anex_core::NA;

use crate::columns::Column;
use crate::project::CellValue;

/// How a column's values are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Fixed two decimal places: `12.345` → `"12.35"`.
    PlainNumber,
    /// Two decimal places with the context currency symbol appended:
    /// `9.5` with `"€"` → `"9.50€"`.
    Currency,
    /// Two decimal places, trailing fraction zeros trimmed, `"%"` appended:
    /// `50` → `"50%"`, `12.345` → `"12.35%"`.
    Percentage,
    Text,
}

/// Substitution rule for missing or non-finite values.
///
/// `Na` renders the `"NA"` placeholder; `Zero` renders the unsigned
/// quantitative `"0"` (the metrics-sheet rule, distinguishing "absent"
/// from "present and zero" the other way around). Neither form ever gets a
/// currency or percent sign appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingPolicy {
    Na,
    Zero,
}

/// Renders one cell value under the column's kind and missing policy.
#[must_use]
pub fn format_cell(value: &CellValue, column: &Column, currency_symbol: &str) -> String {
    match value {
        CellValue::Missing => substitute(column.missing),
        CellValue::Number(n) if !n.is_finite() => substitute(column.missing),
        CellValue::Number(n) => match column.kind {
            ValueKind::PlainNumber | ValueKind::Text => format_number(*n),
            ValueKind::Currency => format!("{}{currency_symbol}", format_number(*n)),
            ValueKind::Percentage => format!("{}%", format_percentage(*n)),
        },
        CellValue::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                substitute(column.missing)
            } else {
                trimmed.to_string()
            }
        }
    }
}

fn substitute(policy: MissingPolicy) -> String {
    match policy {
        MissingPolicy::Na => NA.to_string(),
        MissingPolicy::Zero => "0".to_string(),
    }
}

/// Fixed two-decimal rendering.
fn format_number(n: f64) -> String {
    format!("{n:.2}")
}

/// Two decimals with trailing fraction zeros trimmed, so whole percentages
/// read `"50"` rather than `"50.00"`.
fn format_percentage(n: f64) -> String {
    let s = format!("{n:.2}");
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::ColumnKey;

    fn column(kind: ValueKind, missing: MissingPolicy) -> Column {
        Column {
            key: ColumnKey::Period,
            kind,
            missing,
            label: "Test",
        }
    }

    #[test]
    fn plain_number_rounds_to_two_decimals() {
        let col = column(ValueKind::PlainNumber, MissingPolicy::Na);
        assert_eq!(format_cell(&CellValue::Number(12.345), &col, "$"), "12.35");
        assert_eq!(format_cell(&CellValue::Number(7.0), &col, "$"), "7.00");
    }

    #[test]
    fn currency_appends_symbol_after_two_decimals() {
        let col = column(ValueKind::Currency, MissingPolicy::Na);
        assert_eq!(format_cell(&CellValue::Number(9.5), &col, "€"), "9.50€");
    }

    #[test]
    fn percentage_trims_trailing_zeros() {
        let col = column(ValueKind::Percentage, MissingPolicy::Na);
        assert_eq!(format_cell(&CellValue::Number(50.0), &col, "$"), "50%");
        assert_eq!(format_cell(&CellValue::Number(12.345), &col, "$"), "12.35%");
        assert_eq!(format_cell(&CellValue::Number(9.5), &col, "$"), "9.5%");
    }

    #[test]
    fn missing_text_renders_placeholder() {
        let col = column(ValueKind::Text, MissingPolicy::Na);
        assert_eq!(format_cell(&CellValue::Missing, &col, "$"), "NA");
        assert_eq!(
            format_cell(&CellValue::Text("  ".to_string()), &col, "$"),
            "NA"
        );
    }

    #[test]
    fn missing_number_under_zero_policy_renders_unsigned_zero() {
        let col = column(ValueKind::Currency, MissingPolicy::Zero);
        assert_eq!(format_cell(&CellValue::Missing, &col, "€"), "0");
        assert_eq!(format_cell(&CellValue::Number(f64::NAN), &col, "€"), "0");
    }

    #[test]
    fn sign_is_never_applied_to_placeholder() {
        let percent = column(ValueKind::Percentage, MissingPolicy::Na);
        let currency = column(ValueKind::Currency, MissingPolicy::Na);
        assert_eq!(format_cell(&CellValue::Missing, &percent, "$"), "NA");
        assert_eq!(format_cell(&CellValue::Missing, &currency, "€"), "NA");
    }

    #[test]
    fn present_zero_is_distinct_from_missing() {
        let col = column(ValueKind::PlainNumber, MissingPolicy::Zero);
        assert_eq!(format_cell(&CellValue::Number(0.0), &col, "$"), "0.00");
        assert_eq!(format_cell(&CellValue::Missing, &col, "$"), "0");
    }

    #[test]
    fn text_passes_through_trimmed() {
        let col = column(ValueKind::Text, MissingPolicy::Na);
        assert_eq!(
            format_cell(&CellValue::Text(" #summer ".to_string()), &col, "$"),
            "#summer"
        );
    }
}
