//! Curriculum summary display utilities for CLI output.

use provost_core::Curriculum;

/// Options for displaying a curriculum summary.
#[derive(Debug, Clone, Default)]
pub struct CurriculumSummaryOpts<'a> {
    /// Optional title to display before the curriculum details.
    pub title: Option<&'a str>,
    /// Whether to include the database ID.
    pub show_id: bool,
    /// Whether to include the course count.
    pub show_courses: bool,
    /// Whether to include created/updated timestamps.
    pub show_timestamps: bool,
}

impl<'a> CurriculumSummaryOpts<'a> {
    /// Create options with a title and default fields.
    pub fn with_title(title: &'a str) -> Self {
        Self {
            title: Some(title),
            show_courses: true,
            ..Default::default()
        }
    }

    /// Create options for deletion confirmation (includes ID and timestamps).
    pub fn for_removal() -> Self {
        Self {
            title: Some("Curriculum to delete:"),
            show_id: true,
            show_courses: true,
            show_timestamps: true,
        }
    }
}

/// Display a curriculum summary to stdout.
///
/// # Examples
///
/// ```rust,ignore
/// use provost_cli::presentation::{CurriculumSummaryOpts, display_curriculum_summary};
///
/// // Simple usage with title
/// display_curriculum_summary(&curriculum, CurriculumSummaryOpts::with_title("Curriculum created:"));
///
/// // For deletion confirmation
/// display_curriculum_summary(&curriculum, CurriculumSummaryOpts::for_removal());
/// ```
pub fn display_curriculum_summary(curriculum: &Curriculum, opts: CurriculumSummaryOpts) {
    if let Some(title) = opts.title {
        println!("{title}");
    }

    if opts.show_id {
        println!("  ID: {}", curriculum.id);
    }

    println!("  Code: {}", curriculum.curriculum_code);
    println!("  Major: {}", curriculum.major_code);

    if !curriculum.classification.is_empty() {
        println!("  Classification: {}", curriculum.classification);
    }

    println!("  Degree: {}", curriculum.degree);
    println!("  Credits: {}", curriculum.total_credits);

    if opts.show_courses {
        println!("  Courses: {}", curriculum.plan.len());
    }

    if !curriculum.is_active {
        println!("  Active: no");
    }

    if opts.show_timestamps {
        println!(
            "  Created: {}",
            curriculum.created_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
        println!(
            "  Updated: {}",
            curriculum.updated_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
    }
}
