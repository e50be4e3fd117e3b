//! Workbook writing via `rust_xlsxwriter`.

use provost_core::workbook::{CellValue, SheetTable, WorkbookError};
use rust_xlsxwriter::{Color, Format, Workbook, Worksheet};

/// Columns that stay visually tied to the course row above them (code, name,
/// type). Continuation rows shade these so multi-semester courses read as
/// one block.
const CARRIED_COLUMNS: u16 = 3;

/// Write a [`SheetTable`] as .xlsx bytes.
///
/// Headers are bold on a grey fill. Rows whose first cell is blank are
/// continuation rows and get a lighter fill on the carried columns. Column
/// widths are fitted to the content.
#[allow(clippy::cast_possible_truncation)]
pub fn bytes_from_sheet(table: &SheetTable) -> Result<Vec<u8>, WorkbookError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet
        .set_name(&table.name)
        .map_err(|e| WorkbookError::Encode(e.to_string()))?;

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xCC_CCCC));
    let carry_format = Format::new().set_background_color(Color::RGB(0xEE_EEEE));

    for (col, header) in table.headers.iter().enumerate() {
        sheet
            .write_with_format(0, col as u16, header.as_str(), &header_format)
            .map_err(|e| WorkbookError::Encode(e.to_string()))?;
    }

    for (i, row) in table.rows.iter().enumerate() {
        let row_num = (i + 1) as u32;
        let carried = row.first().is_none_or(CellValue::is_blank);
        for (col, value) in row.iter().enumerate() {
            let col_num = col as u16;
            let format = (carried && col_num < CARRIED_COLUMNS).then_some(&carry_format);
            write_cell(sheet, row_num, col_num, value, format)?;
        }
    }

    sheet.autofit();

    workbook
        .save_to_buffer()
        .map_err(|e| WorkbookError::Encode(e.to_string()))
}

fn write_cell(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &CellValue,
    format: Option<&Format>,
) -> Result<(), WorkbookError> {
    let written = match (value, format) {
        (CellValue::Text(s), Some(f)) => sheet.write_with_format(row, col, s.as_str(), f),
        (CellValue::Text(s), None) => sheet.write(row, col, s.as_str()),
        (CellValue::Number(n), Some(f)) => sheet.write_with_format(row, col, *n, f),
        (CellValue::Number(n), None) => sheet.write(row, col, *n),
        (CellValue::Bool(b), Some(f)) => sheet.write_with_format(row, col, *b, f),
        (CellValue::Bool(b), None) => sheet.write(row, col, *b),
        (CellValue::Empty, Some(f)) => sheet.write_blank(row, col, f),
        (CellValue::Empty, None) => return Ok(()),
    };
    written.map_err(|e| WorkbookError::Encode(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produced_bytes_are_a_zip_container() {
        let mut table = SheetTable::new("Curriculum");
        table.headers = vec!["course_code".to_string(), "credits".to_string()];
        table.push_row(vec![CellValue::from("CS101"), CellValue::from(3_u32)]);

        let bytes = bytes_from_sheet(&table).unwrap();
        // xlsx files are zip archives; check the magic instead of unpacking
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn sheet_name_must_be_legal() {
        // Excel forbids names over 31 characters; the error must surface
        // instead of silently truncating.
        let table = SheetTable::new("a".repeat(40));
        assert!(matches!(
            bytes_from_sheet(&table),
            Err(WorkbookError::Encode(_))
        ));
    }
}
