//! Write-once document model: sheets, rows, and the request flag set.

use anex_core::NA;

use crate::columns::ColumnSet;

/// The five report sections, in no particular order. Display order is
/// always [`SHEET_ORDER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetKind {
    Request,
    Profile,
    Metrics,
    Audience,
    Trends,
}

/// Canonical sheet display order. The assembler appends sheets in this
/// order regardless of how the caller toggled the request flags.
pub const SHEET_ORDER: [SheetKind; 5] = [
    SheetKind::Request,
    SheetKind::Profile,
    SheetKind::Metrics,
    SheetKind::Audience,
    SheetKind::Trends,
];

impl std::fmt::Display for SheetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SheetKind::Request => "request",
            SheetKind::Profile => "profile",
            SheetKind::Metrics => "metrics",
            SheetKind::Audience => "audience",
            SheetKind::Trends => "trends",
        };
        f.write_str(name)
    }
}

/// One display-ready row, aligned positionally to the sheet's column set.
pub type Row = Vec<String>;

/// A finished sheet: localized name, ordered columns, and data rows.
/// Never mutated after assembly.
#[derive(Debug, Clone)]
pub struct Sheet {
    pub kind: SheetKind,
    pub name: String,
    pub columns: ColumnSet,
    pub rows: Vec<Row>,
}

impl Sheet {
    #[must_use]
    pub fn new(kind: SheetKind, name: String, columns: ColumnSet) -> Self {
        Self {
            kind,
            name,
            columns,
            rows: Vec::new(),
        }
    }

    /// Appends a data row, padding short rows with the `"NA"` placeholder so
    /// every stored row has exactly one cell per column. Rows can never be
    /// longer than the column set: builders resolve exactly one cell source
    /// per column, so width is bounded by construction.
    pub fn push_row(&mut self, mut row: Row) {
        while row.len() < self.columns.len() {
            row.push(NA.to_string());
        }
        self.rows.push(row);
    }
}

/// Ordered collection of finished sheets. Insertion order is display order.
#[derive(Debug, Clone, Default)]
pub struct Document {
    sheets: Vec<Sheet>,
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sheet: Sheet) {
        self.sheets.push(sheet);
    }

    #[must_use]
    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    #[must_use]
    pub fn sheet(&self, kind: SheetKind) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.kind == kind)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sheets.len()
    }
}

/// Which sheet kinds the caller wants in the document. Any subset is valid,
/// including none at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct SheetRequestFlags {
    pub request: bool,
    pub profile: bool,
    pub metrics: bool,
    pub audience: bool,
    pub trends: bool,
}

impl SheetRequestFlags {
    #[must_use]
    pub fn all() -> Self {
        Self {
            request: true,
            profile: true,
            metrics: true,
            audience: true,
            trends: true,
        }
    }

    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_set(&self, kind: SheetKind) -> bool {
        match kind {
            SheetKind::Request => self.request,
            SheetKind::Profile => self.profile,
            SheetKind::Metrics => self.metrics,
            SheetKind::Audience => self.audience,
            SheetKind::Trends => self.trends,
        }
    }
}
