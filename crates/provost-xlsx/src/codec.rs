//! The `WorkbookCodec` implementation backed by real .xlsx bytes.

use provost_core::WorkbookCodec;
use provost_core::workbook::{SheetTable, WorkbookError};

use crate::{decode, encode};

/// Workbook codec for .xlsx files.
///
/// Implements the `WorkbookCodec` port from `provost-core`: decoding reads
/// the first worksheet into a [`SheetTable`], encoding writes a single
/// styled worksheet.
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxCodec;

impl XlsxCodec {
    /// Create a new xlsx codec.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl WorkbookCodec for XlsxCodec {
    fn decode(&self, bytes: &[u8]) -> Result<SheetTable, WorkbookError> {
        decode::sheet_from_bytes(bytes)
    }

    fn encode(&self, table: &SheetTable) -> Result<Vec<u8>, WorkbookError> {
        encode::bytes_from_sheet(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use provost_core::workbook::{COLUMNS, plan_from_table, preview, template_table};

    #[test]
    fn template_survives_a_file_round_trip() {
        let codec = XlsxCodec::new();
        let template = template_table();

        let bytes = codec.encode(&template).unwrap();
        let read_back = codec.decode(&bytes).unwrap();

        assert_eq!(read_back.name, template.name);
        assert_eq!(read_back.headers, COLUMNS.map(str::to_string).to_vec());
        assert_eq!(read_back.rows.len(), template.rows.len());

        let result = preview(&read_back).unwrap();
        assert!(result.is_clean());
        assert_eq!(result.plan.len(), 2);
    }

    #[test]
    fn continuation_rows_keep_their_meaning_through_the_format() {
        let codec = XlsxCodec::new();
        let template = template_table();

        let original = plan_from_table(&template).unwrap();
        let bytes = codec.encode(&template).unwrap();
        let reread = plan_from_table(&codec.decode(&bytes).unwrap()).unwrap();

        // CS201 spans two semesters via a continuation row in the template
        assert_eq!(reread.get("CS201").unwrap().semesters.len(), 2);
        assert_eq!(reread, original);
    }

    #[test]
    fn numbers_written_as_cells_come_back_as_numbers() {
        let codec = XlsxCodec::new();
        let bytes = codec.encode(&template_table()).unwrap();
        let table = codec.decode(&bytes).unwrap();

        let credits = table.column_index("credits").unwrap();
        assert_eq!(
            table.cell(0, credits),
            &provost_core::CellValue::Number(3.0)
        );
    }
}
