//! Main commands enum and primary subcommands.
//!
//! This module defines the available commands for the CLI tool.

use clap::Subcommand;

use crate::curriculum_commands::CurriculumCommand;
use crate::manifest_commands::ManifestCommand;
use crate::user_commands::UserCommand;

/// Available commands for the curriculum management tool.
#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Interface to bind
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
        /// Port to serve on
        #[arg(short, long, default_value = "8000")]
        port: u16,
        /// Allowed CORS origin (repeat for several; all origins when omitted)
        #[arg(long = "allow-origin", action = clap::ArgAction::Append)]
        allow_origins: Vec<String>,
    },

    /// Import curriculum workbooks (.xlsx)
    Import {
        /// Workbook file(s) to import
        #[arg(required = true)]
        files: Vec<String>,
        /// Preview parsed data without saving
        #[arg(long)]
        preview: bool,
        /// Force import even with warnings
        #[arg(short, long)]
        force: bool,
        /// Department code for curricula this import has to create
        #[arg(short, long)]
        department: Option<String>,
        /// Target curriculum code (default: the file name stem)
        #[arg(short, long)]
        curriculum: Option<String>,
    },

    /// Export a curriculum plan as an .xlsx workbook
    Export {
        /// Curriculum code to export
        curriculum_code: String,
        /// Destination file
        #[arg(short, long)]
        output: String,
    },

    /// Write the empty course-plan workbook template
    Template {
        /// Destination file
        #[arg(short, long, default_value = "curriculum_template.xlsx")]
        output: String,
    },

    /// Inspect and manage curricula
    Curriculum {
        #[command(subcommand)]
        command: CurriculumCommand,
    },

    /// Manage user accounts
    User {
        #[command(subcommand)]
        command: UserCommand,
    },

    /// Populate the database with demonstration departments and staff
    Seed {
        /// Professors per department (default: random 7-10)
        #[arg(long)]
        professors_per_department: Option<u32>,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Check pinned requirements manifests
    Manifest {
        #[command(subcommand)]
        command: ManifestCommand,
    },

    /// Show resolved paths for the data directory and database
    Paths,
}
