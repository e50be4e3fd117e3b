#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings for planned test infrastructure
#[cfg(test)]
use tokio_test as _;

// Dependencies used only by the binary entry point
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod curriculum_commands;
pub mod error;
pub mod handlers;
pub mod manifest_commands;
pub mod parser;
pub mod presentation;
pub mod user_commands;
pub mod utils;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use curriculum_commands::CurriculumCommand;
pub use error::CliError;
pub use manifest_commands::ManifestCommand;
pub use parser::Cli;
pub use user_commands::UserCommand;
