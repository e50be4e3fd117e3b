//! User account subcommands.

use clap::Subcommand;

/// User account commands.
#[derive(Subcommand)]
pub enum UserCommand {
    /// Create a superadmin account
    CreateAdmin {
        /// Login name
        #[arg(long)]
        username: String,
        /// Email address
        #[arg(long)]
        email: String,
        /// Password (prompted for when omitted)
        #[arg(long)]
        password: Option<String>,
        /// First name
        #[arg(long, default_value = "")]
        first_name: String,
        /// Last name
        #[arg(long, default_value = "")]
        last_name: String,
    },
}
