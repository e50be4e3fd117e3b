//! Database setup and initialization.
//!
//! This module provides the `setup_database()` function for initializing
//! the `SQLite` database with full schema. Entry points call this with the
//! resolved database path.

use anyhow::Result;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use std::path::Path;

/// Sets up the `SQLite` database connection and ensures the schema exists.
///
/// This function:
/// 1. Establishes a connection to the `SQLite` database file
/// 2. Creates the database file if it doesn't exist
/// 3. Creates all tables and indexes
///
/// # Arguments
///
/// * `db_path` - Path to the `SQLite` database file
///
/// # Errors
///
/// Returns an error if:
/// - The database file cannot be opened or created
/// - Schema creation fails
///
/// # Example
///
/// ```rust,no_run
/// use provost_db::setup_database;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// let db_path = Path::new("/path/to/provost.db");
/// let pool = setup_database(db_path).await?;
/// # Ok(())
/// # }
/// ```
pub async fn setup_database(db_path: &Path) -> Result<SqlitePool> {
    // Ensure parent directory exists
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let pool = SqlitePool::connect_with(
        SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true),
    )
    .await?;

    // Create all tables and indexes
    create_schema(&pool).await?;

    Ok(pool)
}

/// Sets up an in-memory `SQLite` database for testing.
///
/// Creates a fresh in-memory database with the full production schema.
#[cfg(any(test, feature = "test-utils"))]
pub async fn setup_test_database() -> Result<SqlitePool> {
    let pool = SqlitePool::connect("sqlite::memory:").await?;
    create_schema(&pool).await?;
    Ok(pool)
}

/// Creates the complete database schema.
///
/// This function creates all tables and indexes required by the application.
/// It is safe to call multiple times as all operations use IF NOT EXISTS.
pub(crate) async fn create_schema(pool: &SqlitePool) -> Result<()> {
    // Create the users table. Roles are stored as their two-letter codes.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            email TEXT NOT NULL,
            first_name TEXT NOT NULL DEFAULT '',
            last_name TEXT NOT NULL DEFAULT '',
            user_type TEXT NOT NULL CHECK (user_type IN ('SA', 'DH', 'PR')),
            is_active INTEGER NOT NULL DEFAULT 1,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Create the departments table. A department loses its head, not its
    // existence, when the head account is deleted.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS departments (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            code TEXT NOT NULL UNIQUE,
            title TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            head_user_id INTEGER,
            FOREIGN KEY (head_user_id) REFERENCES users(id) ON DELETE SET NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Index on head_user_id for reverse lookups (which department does this
    // user head)
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_departments_head ON departments(head_user_id)")
        .execute(pool)
        .await?;

    // Create the professors table. Profiles die with their user account but
    // survive the deletion of their department.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS professors (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL UNIQUE,
            department_id INTEGER,
            full_name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            phone_number TEXT NOT NULL DEFAULT '',
            years_of_experience INTEGER NOT NULL DEFAULT 0,
            has_phd INTEGER NOT NULL DEFAULT 0,
            FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE,
            FOREIGN KEY (department_id) REFERENCES departments(id) ON DELETE SET NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Index on department_id for roster queries
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_professors_department ON professors(department_id)")
        .execute(pool)
        .await?;

    // Create the curricula table. The course plan is stored as one JSON
    // document; plans are always read and written whole.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS curricula (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            curriculum_code TEXT NOT NULL UNIQUE,
            major_code TEXT NOT NULL,
            classification TEXT NOT NULL DEFAULT '',
            degree_type TEXT NOT NULL CHECK (degree_type IN ('BSC', 'MSC')),
            total_credits INTEGER NOT NULL,
            department_id INTEGER NOT NULL,
            courses_json TEXT NOT NULL DEFAULT '{}',
            is_active INTEGER NOT NULL DEFAULT 1,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            FOREIGN KEY (department_id) REFERENCES departments(id) ON DELETE RESTRICT
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Index on department_id for per-department curriculum queries
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_curricula_department ON curricula(department_id)")
        .execute(pool)
        .await?;

    Ok(())
}
