//! Composition utilities for building `AppCore` with `SQLite` backends.
//!
//! This module provides factory functions for wiring up the application
//! with `SQLite` repositories. It is focused purely on construction and
//! should not contain any domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use provost_core::Repos;
use provost_core::WorkbookCodec;
use provost_core::services::AppCore;

use crate::repositories::{
    SqliteCurriculumRepository, SqliteDepartmentRepository, SqliteProfessorRepository,
    SqliteUserRepository,
};

/// Factory for creating repository instances with `SQLite` backends.
///
/// This struct provides composition utilities only, no domain logic.
pub struct CoreFactory;

impl CoreFactory {
    /// Create a `SQLite` connection pool.
    ///
    /// # Arguments
    ///
    /// * `db_url` - `SQLite` connection URL (e.g., "sqlite:~/.provost/provost.db")
    pub async fn create_pool(db_url: &str) -> anyhow::Result<SqlitePool> {
        let pool = SqlitePool::connect(db_url).await?;
        Ok(pool)
    }

    /// Create an in-memory `SQLite` pool for testing.
    pub async fn create_test_pool() -> anyhow::Result<SqlitePool> {
        let pool = SqlitePool::connect("sqlite::memory:").await?;
        Ok(pool)
    }

    /// Build all `SQLite` repositories from a pool.
    ///
    /// This is the recommended way for adapters to obtain repositories.
    /// Returns a `Repos` struct from `provost-core` containing
    /// trait-object-wrapped repositories.
    pub fn build_repos(pool: SqlitePool) -> Repos {
        Repos::new(
            Arc::new(SqliteUserRepository::new(pool.clone())),
            Arc::new(SqliteDepartmentRepository::new(pool.clone())),
            Arc::new(SqliteProfessorRepository::new(pool.clone())),
            Arc::new(SqliteCurriculumRepository::new(pool)),
        )
    }

    /// Build a complete `AppCore` instance from a pool and workbook codec.
    ///
    /// This is the recommended single-step way for adapters to obtain
    /// a fully composed `AppCore`. Equivalent to:
    ///
    /// ```ignore
    /// let repos = CoreFactory::build_repos(pool);
    /// let core = AppCore::new(repos, codec);
    /// ```
    ///
    /// # Arguments
    ///
    /// * `pool` - `SQLite` connection pool from `setup_database()`
    /// * `codec` - Workbook codec implementation (e.g., `XlsxCodec`)
    pub fn build_app_core(pool: SqlitePool, codec: Arc<dyn WorkbookCodec>) -> AppCore {
        let repos = Self::build_repos(pool);
        AppCore::new(repos, codec)
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with the production schema
/// already applied, plus shortcuts for building repositories over it.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// The underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Build the full repository container over this database.
    pub fn repos(&self) -> Repos {
        CoreFactory::build_repos(self.pool.clone())
    }
}
