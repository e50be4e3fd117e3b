//! Workbook reading via `calamine`.

use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};
use provost_core::workbook::{CellValue, SheetTable, WorkbookError};

/// Read the first worksheet of an .xlsx byte buffer into a [`SheetTable`].
///
/// The first sheet is used regardless of its name, so workbooks produced by
/// other tools do not have to match our sheet naming. The first row becomes
/// the header row; everything below it becomes data rows.
pub fn sheet_from_bytes(bytes: &[u8]) -> Result<SheetTable, WorkbookError> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))
        .map_err(|e| WorkbookError::InvalidFormat(e.to_string()))?;

    let name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| WorkbookError::InvalidFormat("workbook has no sheets".to_string()))?;
    let range = workbook
        .worksheet_range(&name)
        .map_err(|e| WorkbookError::InvalidFormat(e.to_string()))?;

    let mut table = SheetTable::new(name);
    let mut rows = range.rows();
    if let Some(header) = rows.next() {
        table.headers = header.iter().map(cell_text).collect();
    }
    for row in rows {
        table.push_row(row.iter().map(cell_value).collect());
    }

    Ok(table)
}

/// Header cells rendered as plain text.
fn cell_text(data: &Data) -> String {
    match data {
        Data::String(s) => s.trim().to_string(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

/// Map a spreadsheet cell onto the format-independent cell type.
///
/// Date and duration cells have no meaning in a curriculum sheet; they are
/// carried through as their underlying number or ISO text so the import
/// rules can reject them with the offending value visible. Formula errors
/// come through as their display text (`#N/A` and friends) for the same
/// reason.
#[allow(clippy::cast_precision_loss)]
fn cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Text(e.to_string()),
    }
}
