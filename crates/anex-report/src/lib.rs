//! Report assembly engine: projects a normalized analytics payload into an
//! in-memory multi-sheet document.
//!
//! The pipeline is pure and synchronous: the column registry decides which
//! columns exist for a (platform, language, originator) combination, the row
//! projector flattens scalar and list-valued fields into aligned rows, the
//! formatter renders display-ready cell text, and the assembler fans out to
//! one builder per requested sheet kind in canonical order.

pub mod assemble;
pub mod columns;
pub mod document;
pub mod error;
pub mod format;
pub mod project;
pub mod sheets;

pub use assemble::assemble;
pub use columns::{columns_for, sheet_title, Column, ColumnKey, ColumnSet};
pub use document::{Document, Row, Sheet, SheetKind, SheetRequestFlags, SHEET_ORDER};
pub use error::ReportError;
pub use format::{format_cell, MissingPolicy, ValueKind};
pub use project::{project, CellSource, CellValue};
