//! Export command handler.
//!
//! Writes a curriculum's course plan to an .xlsx workbook on disk.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the export command.
///
/// # Arguments
///
/// * `ctx` - The CLI context providing access to `AppCore`
/// * `curriculum_code` - Code of the curriculum to export
/// * `output` - Destination file path
///
/// # Errors
///
/// Returns an error if the curriculum does not exist, encoding fails,
/// or the file cannot be written.
pub async fn execute(ctx: &CliContext, curriculum_code: &str, output: &str) -> Result<()> {
    let bytes = ctx.app().curricula().export(curriculum_code).await?;
    std::fs::write(output, &bytes).map_err(CliError::from)?;

    println!("Exported curriculum {curriculum_code} to {output}");
    Ok(())
}
