//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from `CoreError` to exit codes and user-facing messages.

use provost_core::{CoreError, PathError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Core domain error.
    #[error("{0}")]
    Core(String),

    /// Argument parsing error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Malformed input data (workbook contents, course plans).
    #[error("Invalid data: {0}")]
    Data(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            CliError::Core(_) => 1,
            CliError::Arguments(_) => 2, // EX_USAGE
            CliError::Data(_) => 65,     // EX_DATAERR
            CliError::Io(_) => 74,       // EX_IOERR
            CliError::Config(_) => 78,   // EX_CONFIG
            CliError::Database(_) => 73, // EX_CANTCREAT (closest fit)
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        Self::from(&err)
    }
}

impl From<&CoreError> for CliError {
    fn from(err: &CoreError) -> Self {
        match err {
            CoreError::Repository(repo_err) => CliError::Database(repo_err.to_string()),
            CoreError::Plan(plan_err) => CliError::Data(plan_err.to_string()),
            CoreError::Curriculum(curriculum_err) => CliError::Data(curriculum_err.to_string()),
            CoreError::Workbook(workbook_err) => CliError::Data(workbook_err.to_string()),
            CoreError::Validation(msg) => CliError::Arguments(msg.clone()),
            CoreError::Forbidden(msg) | CoreError::Internal(msg) => CliError::Core(msg.clone()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io(err.to_string())
    }
}

/// Resolve the exit code for a top-level command failure.
///
/// Walks the error chain for the most specific classification before
/// falling back to the general error code.
pub fn exit_code_of(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    if let Some(core_err) = err.downcast_ref::<CoreError>() {
        return CliError::from(core_err).exit_code();
    }
    if err.downcast_ref::<PathError>().is_some() {
        return 78;
    }
    if err.downcast_ref::<std::io::Error>().is_some() {
        return 74;
    }
    1
}
