//! Workbook codec port definition.
//!
//! This port abstracts the spreadsheet file format, so the core can turn
//! plans into tables (and back) without knowing about xlsx. The real codec
//! lives in the xlsx adapter crate; tests get a no-op stand-in.

// Re-export the table types for convenience
pub use crate::workbook::{CellValue, SheetTable, WorkbookError};

use crate::workbook::COLUMNS;

/// Port for reading and writing workbook files.
///
/// # Port Signature Rules
///
/// - Only core types (`SheetTable`, `WorkbookError`) in signatures
/// - One worksheet per file: `decode` reads the first sheet, `encode`
///   writes exactly the sheet it is given
/// - Styling (header emphasis, continuation shading) is applied by
///   implementations on encode and ignored on decode
pub trait WorkbookCodec: Send + Sync {
    /// Decode workbook bytes into the first worksheet's grid.
    fn decode(&self, bytes: &[u8]) -> Result<SheetTable, WorkbookError>;

    /// Encode one worksheet's grid into workbook bytes.
    fn encode(&self, table: &SheetTable) -> Result<Vec<u8>, WorkbookError>;
}

/// A no-op codec for wiring and tests.
///
/// `decode` ignores its input and returns a correctly-headed empty sheet
/// (which reads back as an empty plan); `encode` returns no bytes.
#[derive(Debug, Clone, Default)]
pub struct NoopWorkbookCodec;

impl WorkbookCodec for NoopWorkbookCodec {
    fn decode(&self, _bytes: &[u8]) -> Result<SheetTable, WorkbookError> {
        let mut table = SheetTable::new("Sheet1");
        table.headers = COLUMNS.iter().map(|c| (*c).to_string()).collect();
        Ok(table)
    }

    fn encode(&self, _table: &SheetTable) -> Result<Vec<u8>, WorkbookError> {
        Ok(Vec::new())
    }
}
