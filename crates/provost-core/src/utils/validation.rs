//! File validation utilities for curriculum workbook files.
//!
//! This module provides validation functions to ensure files are
//! .xlsx workbooks and can be safely handed to the decoder.

use crate::ports::WorkbookCodec;
use crate::workbook::{self, ImportPreview};
use anyhow::{Result, anyhow};
use std::path::Path;

/// Validates that a file exists and has an .xlsx extension.
///
/// # Arguments
/// * `file_path` - Path to the file to validate
///
/// # Returns
/// * `Ok(())` if valid, `Err` if file doesn't exist or has wrong extension
///
/// # Examples
///
/// ```rust
/// use provost_core::utils::validation::validate_file;
/// use std::fs::File;
/// use tempfile::tempdir;
///
/// // Create a temporary .xlsx file
/// let temp_dir = tempdir().unwrap();
/// let file_path = temp_dir.path().join("curriculum.xlsx");
/// File::create(&file_path).unwrap();
///
/// // Validate the file
/// let result = validate_file(file_path.to_str().unwrap());
/// assert!(result.is_ok());
/// ```
///
/// ```rust
/// use provost_core::utils::validation::validate_file;
///
/// // Non-existent file should fail
/// let result = validate_file("/nonexistent/curriculum.xlsx");
/// assert!(result.is_err());
/// ```
pub fn validate_file(file_path: &str) -> Result<()> {
    let path: &Path = Path::new(file_path);

    if !path.exists() {
        return Err(anyhow!("File does not exist: {file_path}"));
    }
    match path.extension() {
        Some(ext) if ext == "xlsx" => Ok(()),
        Some(_) => Err(anyhow!("Wrong extension.")),
        None => Err(anyhow!("File has no extension.")),
    }
}

/// Validates a workbook file and computes its import preview.
///
/// This function performs both file validation (existence and extension) and
/// sheet decoding, then runs the import rules to produce a parsed plan with
/// its advisory warnings.
///
/// # Arguments
/// * `codec` - The workbook codec to use (injected via port)
/// * `file_path` - Path to the .xlsx file to validate and preview
///
/// # Returns
/// * `Ok(ImportPreview)` with the parsed plan and warnings if valid
/// * `Err` if the file doesn't exist, has the wrong extension, or the sheet
///   can't be decoded or parsed
pub fn validate_and_preview(codec: &dyn WorkbookCodec, file_path: &str) -> Result<ImportPreview> {
    // First validate the file exists and has the correct extension
    validate_file(file_path)?;

    // Then decode the sheet and run the import rules over it
    let bytes = std::fs::read(file_path)?;
    let table = codec.decode(&bytes)?;
    let preview = workbook::preview(&table)?;

    Ok(preview)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::NoopWorkbookCodec;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_validate_file_success() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("test.xlsx");
        File::create(&file_path).unwrap();

        let result = validate_file(file_path.to_str().unwrap());
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_file_not_exists() {
        let result = validate_file("/nonexistent/path/curriculum.xlsx");
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("File does not exist")
        );
    }

    #[test]
    fn test_validate_file_wrong_extension() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("test.csv");
        File::create(&file_path).unwrap();

        let result = validate_file(file_path.to_str().unwrap());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Wrong extension"));
    }

    #[test]
    fn test_validate_file_no_extension() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("test_no_ext");
        File::create(&file_path).unwrap();

        let result = validate_file(file_path.to_str().unwrap());
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("File has no extension")
        );
    }

    #[test]
    fn test_validate_and_preview_runs_the_import_rules() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("curriculum.xlsx");
        File::create(&file_path).unwrap();

        // The no-op codec decodes any bytes into an empty sheet, so the
        // preview comes back clean with no courses.
        let codec = NoopWorkbookCodec;
        let preview = validate_and_preview(&codec, file_path.to_str().unwrap()).unwrap();
        assert!(preview.is_clean());
        assert!(preview.plan.is_empty());
    }

    #[test]
    fn test_validate_and_preview_rejects_wrong_extension() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("curriculum.pdf");
        File::create(&file_path).unwrap();

        let codec = NoopWorkbookCodec;
        let result = validate_and_preview(&codec, file_path.to_str().unwrap());
        assert!(result.is_err());
    }
}
