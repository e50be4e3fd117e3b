//! Template command handler.
//!
//! Writes the starter workbook template to disk. Works straight off the
//! codec, no database involved.

use anyhow::Result;
use provost_core::WorkbookCodec;
use provost_core::workbook::template_table;
use provost_xlsx::XlsxCodec;

use crate::error::CliError;

/// Execute the template command.
///
/// # Errors
///
/// Returns an error if encoding fails or the file cannot be written.
pub fn execute(output: &str) -> Result<()> {
    let bytes = XlsxCodec::new().encode(&template_table())?;
    std::fs::write(output, &bytes).map_err(CliError::from)?;

    println!("Wrote workbook template to {output}");
    Ok(())
}
