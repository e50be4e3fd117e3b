//! Serve command handler.
//!
//! Starts the HTTP API server. The server performs its own bootstrap
//! (database setup, repository wiring), so this handler does not take a
//! `CliContext`.

use anyhow::Result;
use provost_axum::{ServerConfig, start_server};
use provost_core::paths::database_path;

/// Execute the serve command.
///
/// # Arguments
///
/// * `db_override` - Optional `--db` path override
/// * `host` - Interface to bind
/// * `port` - Port for the HTTP server
/// * `allow_origins` - Exact origins allowed by CORS; empty means allow all
///
/// # Errors
///
/// Returns an error if the database path cannot be resolved or the
/// server fails to bind.
pub async fn execute(
    db_override: Option<&str>,
    host: String,
    port: u16,
    allow_origins: Vec<String>,
) -> Result<()> {
    let mut config = ServerConfig {
        host,
        port,
        database_path: database_path(db_override)?,
        cors: provost_axum::CorsConfig::AllowAll,
    };
    if !allow_origins.is_empty() {
        config = config.with_allowed_origins(allow_origins);
    }

    println!("Database: {}", config.database_path.display());
    println!(
        "Starting server on http://{}:{} (Press Ctrl+C to stop)",
        config.host, config.port
    );

    start_server(config).await
}
