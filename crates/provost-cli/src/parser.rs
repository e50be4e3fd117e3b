//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface definition for the curriculum management tool.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "provost")]
#[command(about = "Manage university departments, curricula, and course plans")]
#[command(version)]
pub struct Cli {
    /// Override the database file for this invocation
    #[arg(long = "db", global = true, env = "PROVOST_DB")]
    pub db: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_args_parse() {
        let cli = Cli::parse_from(["provost", "--verbose", "--db", "/tmp/provost.db", "paths"]);
        assert!(cli.verbose);
        assert_eq!(cli.db, Some("/tmp/provost.db".to_string()));
    }

    #[test]
    fn global_args_apply_after_the_subcommand() {
        let cli = Cli::parse_from(["provost", "curriculum", "list", "--db", "/tmp/other.db"]);
        assert_eq!(cli.db, Some("/tmp/other.db".to_string()));
    }
}
