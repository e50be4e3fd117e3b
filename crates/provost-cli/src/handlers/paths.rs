//! Paths command handler.
//!
//! Shows where provost keeps its data on this machine.

use anyhow::Result;
use provost_core::ResolvedPaths;

/// Execute the paths command.
///
/// # Errors
///
/// Returns an error if path resolution fails.
pub fn execute(db_override: Option<&str>) -> Result<()> {
    let paths = ResolvedPaths::resolve(db_override)?;
    println!("{paths}");
    Ok(())
}
