//! Row projection: flattening one record's scalar and list-valued fields
//! into positionally aligned rows.
//!
//! Each column contributes a tagged [`CellSource`]; the scalar/series
//! decision is made here, once, instead of being re-inspected per cell
//! downstream. List-valued columns fan out vertically; lists of different
//! lengths are padded with [`CellValue::Missing`], never truncated.

/// One unformatted cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Missing,
}

impl CellValue {
    /// Number cell, `Missing` when absent.
    #[must_use]
    pub fn opt_number(value: Option<f64>) -> Self {
        value.map_or(CellValue::Missing, CellValue::Number)
    }

    /// Text cell, `Missing` when absent or blank.
    #[must_use]
    pub fn opt_text(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => CellValue::Missing,
            Some(v) => CellValue::Text(v.to_string()),
        }
    }

    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }
}

/// What one column draws its cells from: a single value or a vertical run.
#[derive(Debug, Clone, PartialEq)]
pub enum CellSource {
    Scalar(CellValue),
    Series(Vec<CellValue>),
}

impl CellSource {
    /// Series built from a list of strings; blanks become `Missing`.
    #[must_use]
    pub fn series_of_text(values: &[String]) -> Self {
        CellSource::Series(
            values
                .iter()
                .map(|v| CellValue::opt_text(Some(v)))
                .collect(),
        )
    }
}

/// Projects one record's column sources into flat rows.
///
/// - All-scalar input yields exactly one row.
/// - With any series present, yields `max(series lengths)` rows; a record
///   whose series are all empty yields no rows unless a scalar is present.
/// - Scalars contribute to the first row only; every other unfilled
///   position is `Missing`.
#[must_use]
pub fn project(sources: &[CellSource]) -> Vec<Vec<CellValue>> {
    let mut series_max: Option<usize> = None;
    let mut has_scalar = false;
    for source in sources {
        match source {
            CellSource::Scalar(_) => has_scalar = true,
            CellSource::Series(values) => {
                series_max = Some(series_max.unwrap_or(0).max(values.len()));
            }
        }
    }

    let row_count = match series_max {
        None => usize::from(!sources.is_empty()),
        Some(max) if has_scalar => max.max(1),
        Some(max) => max,
    };

    (0..row_count)
        .map(|row| {
            sources
                .iter()
                .map(|source| match source {
                    CellSource::Scalar(value) if row == 0 => value.clone(),
                    CellSource::Scalar(_) => CellValue::Missing,
                    CellSource::Series(values) => {
                        values.get(row).cloned().unwrap_or(CellValue::Missing)
                    }
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(values: &[&str]) -> CellSource {
        CellSource::Series(values.iter().map(|v| CellValue::text(*v)).collect())
    }

    #[test]
    fn scalar_only_yields_exactly_one_row() {
        let rows = project(&[
            CellSource::Scalar(CellValue::text("a")),
            CellSource::Scalar(CellValue::Number(1.0)),
        ]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0], CellValue::text("a"));
        assert_eq!(rows[0][1], CellValue::Number(1.0));
    }

    #[test]
    fn unequal_series_pad_shorter_with_missing() {
        let rows = project(&[texts(&["a", "b", "c"]), texts(&["1", "2", "3", "4", "5"])]);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[2][0], CellValue::text("c"));
        assert_eq!(rows[3][0], CellValue::Missing);
        assert_eq!(rows[4][0], CellValue::Missing);
        assert_eq!(rows[4][1], CellValue::text("5"));
    }

    #[test]
    fn series_are_aligned_by_position_index() {
        let rows = project(&[texts(&["x", "y"]), texts(&["10", "20"])]);
        assert_eq!(rows[0], vec![CellValue::text("x"), CellValue::text("10")]);
        assert_eq!(rows[1], vec![CellValue::text("y"), CellValue::text("20")]);
    }

    #[test]
    fn scalar_contributes_to_first_row_only() {
        let rows = project(&[
            CellSource::Scalar(CellValue::text("head")),
            texts(&["a", "b", "c"]),
        ]);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0][0], CellValue::text("head"));
        assert_eq!(rows[1][0], CellValue::Missing);
        assert_eq!(rows[2][0], CellValue::Missing);
    }

    #[test]
    fn all_empty_series_yield_no_rows() {
        let rows = project(&[texts(&[]), texts(&[])]);
        assert!(rows.is_empty());
    }

    #[test]
    fn empty_series_with_scalar_still_yields_one_row() {
        let rows = project(&[CellSource::Scalar(CellValue::text("only")), texts(&[])]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][1], CellValue::Missing);
    }

    #[test]
    fn no_sources_yield_no_rows() {
        assert!(project(&[]).is_empty());
    }

    #[test]
    fn blank_series_entries_become_missing() {
        let source = CellSource::series_of_text(&["#a".to_string(), "  ".to_string()]);
        let rows = project(&[source]);
        assert_eq!(rows[1][0], CellValue::Missing);
    }
}
