//! `SQLite` implementation of the `UserRepository` trait.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use provost_core::{NewUser, RepositoryError, UserAccount, UserRepository};

use super::row_mappers::{USER_SELECT_COLUMNS, row_to_user};

/// `SQLite` implementation of the `UserRepository` trait.
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new `SQLite` user repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Map `SQLx` errors from an insert to `RepositoryError`.
fn map_insert_error(e: &sqlx::Error, username: &str) -> RepositoryError {
    let msg = e.to_string();
    if msg.contains("UNIQUE constraint failed") && msg.contains("users.username") {
        return RepositoryError::AlreadyExists(format!("user '{username}'"));
    }
    RepositoryError::Storage(msg)
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn get_by_id(&self, id: i64) -> Result<UserAccount, RepositoryError> {
        let query = format!("SELECT {USER_SELECT_COLUMNS} FROM users WHERE id = ?");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?
            .ok_or_else(|| RepositoryError::NotFound(format!("User with ID {id}")))?;

        row_to_user(&row)
    }

    async fn get_by_username(&self, username: &str) -> Result<UserAccount, RepositoryError> {
        let query = format!("SELECT {USER_SELECT_COLUMNS} FROM users WHERE username = ?");

        let row = sqlx::query(&query)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?
            .ok_or_else(|| RepositoryError::NotFound(format!("User '{username}'")))?;

        row_to_user(&row)
    }

    async fn insert(&self, user: &NewUser) -> Result<UserAccount, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO users (username, password_hash, email, first_name, last_name, user_type, is_active, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, 1, ?)",
        )
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.role.code())
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| map_insert_error(&e, &user.username))?;

        self.get_by_id(result.last_insert_rowid()).await
    }
}
