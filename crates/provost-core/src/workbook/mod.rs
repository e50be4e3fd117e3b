//! Spreadsheet import and export of curriculum plans.
//!
//! Curricula travel as single-sheet workbooks with one row per course-term.
//! This module owns the format-independent half of that exchange: the
//! [`SheetTable`] cell grid, the table-to-plan reader with its preview
//! warnings, and the plan-to-table writer plus the starter template. Turning
//! a `SheetTable` into actual xlsx bytes (and back) is the job of the
//! [`WorkbookCodec`](crate::ports::WorkbookCodec) port.
//!
//! # Sheet layout
//!
//! Eleven columns, matched by header name case-insensitively:
//!
//! `course_code, course_name, type, credits, semester, lecture, lab,
//! practice, seminar, individual, prerequisites`
//!
//! A row with a course code starts (or, for a repeated code, extends) that
//! course. A row with a blank course code continues the most recent course
//! with another term. Name, type, and prerequisites are taken from a
//! course's first row.

mod export;
mod import;
mod table;

use thiserror::Error;

pub use export::{plan_to_table, template_table, CURRICULUM_SHEET, TEMPLATE_SHEET};
pub use import::{plan_from_table, preview, preview_warnings, ImportPreview};
pub use table::{CellValue, SheetTable};

use crate::domain::PlanError;

/// Column headers of the curriculum sheet, in order.
pub const COLUMNS: [&str; 11] = [
    "course_code",
    "course_name",
    "type",
    "credits",
    "semester",
    "lecture",
    "lab",
    "practice",
    "seminar",
    "individual",
    "prerequisites",
];

/// Errors from reading or writing curriculum workbooks.
///
/// Covers both halves of the exchange: codec implementations report
/// `InvalidFormat` / `Io` / `Encode`, the table reader reports the rest.
/// Row numbers match the spreadsheet, with the header on row 1.
#[derive(Debug, Error)]
pub enum WorkbookError {
    /// The bytes are not a readable workbook.
    #[error("Invalid workbook format: {0}")]
    InvalidFormat(String),

    /// IO error while reading or writing workbook data.
    #[error("IO error: {0}")]
    Io(String),

    /// The workbook could not be serialized.
    #[error("Failed to write workbook: {0}")]
    Encode(String),

    /// The sheet lacks one or more required columns.
    #[error("Missing required columns: {0}")]
    MissingColumns(String),

    /// A data row could not be interpreted.
    #[error("Row {row}: {message}")]
    Row { row: usize, message: String },

    /// The assembled plan failed validation.
    #[error(transparent)]
    Plan(#[from] PlanError),
}
