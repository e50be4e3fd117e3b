//! Manifest check command handler.
//!
//! Parses pip-style requirements manifests and reports malformed lines
//! and version-pin conflicts. Advisory findings (exact duplicate pins)
//! are printed but do not fail the check.

use anyhow::Result;
use provost_core::Manifest;

use crate::error::CliError;

/// Execute the manifest check command.
///
/// # Errors
///
/// Returns an error if a file cannot be read or any manifest carries a
/// blocking issue.
pub fn execute(files: &[String]) -> Result<()> {
    let mut blocking = 0usize;

    for file in files {
        let text = std::fs::read_to_string(file).map_err(CliError::from)?;
        let manifest = Manifest::parse(&text);
        let issues = manifest.check();

        if issues.is_empty() {
            println!("{file}: {} pin(s), no issues", manifest.pins().count());
            continue;
        }

        println!("{file}:");
        for issue in &issues {
            println!("  {issue}");
            if !issue.is_advisory() {
                blocking += 1;
            }
        }
    }

    if blocking > 0 {
        return Err(CliError::Data(format!("{blocking} blocking manifest issue(s)")).into());
    }
    Ok(())
}
