//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the Axum web adapter. All concrete implementations are instantiated
//! here.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use provost_core::paths::{data_root, database_path};
use provost_core::services::AppCore;
use provost_db::{CoreFactory, setup_database};
use provost_xlsx::XlsxCodec;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port for the HTTP server.
    pub port: u16,
    /// Path to the SQLite database file.
    pub database_path: PathBuf,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Create config with default paths.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            database_path: database_path(None)?,
            cors: CorsConfig::default(),
        })
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }
}

/// Application context for the Axum adapter.
///
/// This struct holds all initialized services for the web server.
pub struct AxumContext {
    /// The core application facade.
    pub core: Arc<AppCore>,
}

/// Bootstrap the Axum server with all services.
///
/// Creates the database pool, wires the repositories and the xlsx codec
/// into `AppCore`, and returns the assembled context.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    // Log resolved paths at startup for diagnostics
    let data_root_path = data_root()?;
    tracing::info!(
        target: "provost.paths",
        database_path = %config.database_path.display(),
        data_root = %data_root_path.display(),
        "Axum bootstrap resolved paths"
    );

    let pool = setup_database(&config.database_path).await?;
    let core = Arc::new(CoreFactory::build_app_core(
        pool,
        Arc::new(XlsxCodec::new()),
    ));

    Ok(AxumContext { core })
}

/// Start the web server on the configured host and port.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config).await?;
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("provost web server listening on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
