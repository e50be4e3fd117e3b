//! Curriculum management subcommands.

use clap::Subcommand;

/// Curriculum management commands.
#[derive(Subcommand)]
pub enum CurriculumCommand {
    /// List all curricula
    List,

    /// Show one curriculum with its course plan
    Show {
        /// Curriculum code
        code: String,
    },

    /// Create an empty curriculum
    Create {
        /// Curriculum code (at most 8 characters)
        code: String,
        /// Major code
        #[arg(long)]
        major: String,
        /// Qualification label printed on the diploma
        #[arg(long, default_value = "")]
        classification: String,
        /// Degree type: BSC or MSC
        #[arg(long, default_value = "BSC")]
        degree: String,
        /// Total credits required for graduation
        #[arg(long)]
        credits: u32,
        /// Code of the department that owns the curriculum
        #[arg(long)]
        department: String,
    },

    /// Delete a curriculum
    Delete {
        /// Curriculum code
        code: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}
