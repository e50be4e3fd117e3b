//! Path utilities for the data directory and database location.
//!
//! This module provides the canonical path resolution for all adapters:
//! the same environment variable and fallbacks apply whether the server,
//! the CLI, or a test harness asks.
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters handle user prompts separately
//! - Resolution logic is pure; only the public entry points touch the
//!   filesystem

mod error;

use std::env;
use std::fs;
use std::path::PathBuf;

pub use error::PathError;

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "PROVOST_DATA_DIR";

/// Environment variable that overrides the database file path.
pub const DATABASE_ENV: &str = "PROVOST_DB";

/// Pick the data root from an optional override, without touching the
/// filesystem.
fn data_root_from(override_dir: Option<PathBuf>) -> Result<PathBuf, PathError> {
    if let Some(path) = override_dir {
        return Ok(path);
    }
    let base = dirs::data_local_dir().ok_or(PathError::NoDataDir)?;
    Ok(base.join("provost"))
}

/// Root directory for application data (database, exports).
///
/// Resolution order:
/// 1. `PROVOST_DATA_DIR` environment variable
/// 2. System data directory (e.g., `~/.local/share/provost`)
///
/// The directory is created if it doesn't exist.
pub fn data_root() -> Result<PathBuf, PathError> {
    let root = data_root_from(env::var(DATA_DIR_ENV).ok().map(PathBuf::from))?;
    if !root.exists() {
        fs::create_dir_all(&root).map_err(|e| PathError::CreateFailed {
            path: root.clone(),
            reason: e.to_string(),
        })?;
    }
    Ok(root)
}

/// Path to the `SQLite` database file.
///
/// Resolution order:
/// 1. An explicit override (CLI flag), normalized
/// 2. `PROVOST_DB` environment variable
/// 3. `provost.db` under [`data_root`]
pub fn database_path(override_path: Option<&str>) -> Result<PathBuf, PathError> {
    if let Some(raw) = override_path {
        return normalize_user_path(raw);
    }
    if let Ok(raw) = env::var(DATABASE_ENV) {
        return normalize_user_path(&raw);
    }
    Ok(data_root()?.join("provost.db"))
}

/// Normalize a user-provided path, expanding `~` and making it absolute.
pub fn normalize_user_path(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptyPath);
    }

    let expanded = if trimmed.starts_with("~/") || trimmed == "~" {
        let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
        if trimmed == "~" {
            home
        } else {
            home.join(trimmed.trim_start_matches("~/"))
        }
    } else {
        PathBuf::from(trimmed)
    };

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(expanded))
            .map_err(|e| PathError::CurrentDirError(e.to_string()))
    }
}

/// All resolved paths captured in a single struct.
///
/// Used by the `provost paths` command and by tests comparing adapter
/// parity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Root directory for application data.
    pub data_root: PathBuf,
    /// Path to the `SQLite` database file.
    pub database_path: PathBuf,
}

impl ResolvedPaths {
    /// Resolve all paths using the current environment, honoring an
    /// explicit database override.
    pub fn resolve(db_override: Option<&str>) -> Result<Self, PathError> {
        Ok(Self {
            data_root: data_root()?,
            database_path: database_path(db_override)?,
        })
    }
}

impl std::fmt::Display for ResolvedPaths {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "data_root = {}", self.data_root.display())?;
        write!(f, "database_path = {}", self.database_path.display())
    }
}
