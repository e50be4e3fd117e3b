//! Shared CLI presentation utilities.
//!
//! This module provides reusable display and formatting functions
//! for consistent CLI output across commands.
//!
//! # Guidelines
//!
//! - Keep this module format-only: no domain transforms
//! - Domain transforms belong in core services or CLI-local view-model helpers

pub mod plan_display;
pub mod tables;

// Re-export commonly used items
pub use plan_display::{CurriculumSummaryOpts, display_curriculum_summary};
pub use tables::{print_separator, truncate_string};
