//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. All concrete implementations are instantiated here:
//! - Database pool and repositories (via provost-db)
//! - Workbook codec (via provost-xlsx)
//! - Core services (via provost-core)
//!
//! Command handlers receive the fully-composed `AppCore` and delegate work
//! to it.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use provost_core::paths::database_path;
use provost_core::services::AppCore;
use provost_core::{Actor, Repos, Role, WorkbookCodec};
use provost_db::{CoreFactory, setup_database};
use provost_xlsx::XlsxCodec;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Path to the `SQLite` database file.
    pub database_path: PathBuf,
}

impl CliConfig {
    /// Create config from the standard resolution chain, honoring an
    /// explicit `--db` override.
    pub fn with_defaults(db_override: Option<&str>) -> Result<Self> {
        Ok(Self {
            database_path: database_path(db_override)?,
        })
    }
}

/// Fully composed application context for CLI commands.
///
/// This struct owns all the infrastructure and provides access to
/// the `AppCore` for command handlers.
pub struct CliContext {
    /// The core application facade.
    pub app: AppCore,
    codec: Arc<dyn WorkbookCodec>,
    operator: Actor,
}

impl CliContext {
    /// Access the `AppCore`.
    pub const fn app(&self) -> &AppCore {
        &self.app
    }

    /// Access the workbook codec for file validation and previews.
    pub const fn codec(&self) -> &Arc<dyn WorkbookCodec> {
        &self.codec
    }

    /// The actor CLI commands act as.
    ///
    /// Shell access means full trust: commands run with superadmin rights,
    /// the way the original management commands bypassed the API layer.
    pub const fn operator(&self) -> &Actor {
        &self.operator
    }
}

fn operator_actor() -> Actor {
    Actor {
        user_id: 0,
        username: "operator".to_string(),
        role: Role::Superadmin,
        headed_department: None,
    }
}

/// Bootstrap the CLI application.
///
/// This is the composition root. It:
/// 1. Creates the database pool with full schema setup
/// 2. Wires the repositories and the xlsx codec into `AppCore`
/// 3. Attaches the operator actor used for write operations
pub async fn bootstrap(config: CliConfig) -> Result<CliContext> {
    let pool = setup_database(&config.database_path).await?;
    let codec: Arc<dyn WorkbookCodec> = Arc::new(XlsxCodec::new());
    let app = CoreFactory::build_app_core(pool, codec.clone());

    tracing::debug!(
        database_path = %config.database_path.display(),
        "CLI bootstrap complete"
    );

    Ok(CliContext {
        app,
        codec,
        operator: operator_actor(),
    })
}

/// Bootstrap with custom repositories and codec (for testing).
pub fn bootstrap_with(repos: Repos, codec: Arc<dyn WorkbookCodec>) -> CliContext {
    let app = AppCore::new(repos, codec.clone());
    CliContext {
        app,
        codec,
        operator: operator_actor(),
    }
}
