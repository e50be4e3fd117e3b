//! Requirements manifest subcommands.

use clap::Subcommand;

/// Manifest commands.
#[derive(Subcommand)]
pub enum ManifestCommand {
    /// Parse manifests and report malformed lines and conflicting pins
    Check {
        /// Manifest file(s) to check
        #[arg(required = true)]
        files: Vec<String>,
    },
}
