//! `SQLite` implementation of the `ProfessorRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use provost_core::{NewProfessor, Professor, ProfessorRepository, RepositoryError};

use super::row_mappers::{PROFESSOR_SELECT_COLUMNS, row_to_professor};

/// `SQLite` implementation of the `ProfessorRepository` trait.
pub struct SqliteProfessorRepository {
    pool: SqlitePool,
}

impl SqliteProfessorRepository {
    /// Create a new `SQLite` professor repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn get_by_id(&self, id: i64) -> Result<Professor, RepositoryError> {
        let query = format!("SELECT {PROFESSOR_SELECT_COLUMNS} FROM professors WHERE id = ?");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?
            .ok_or_else(|| RepositoryError::NotFound(format!("Professor with ID {id}")))?;

        row_to_professor(&row)
    }
}

/// Map `SQLx` errors from an insert to `RepositoryError`.
fn map_insert_error(e: &sqlx::Error, professor: &NewProfessor) -> RepositoryError {
    let msg = e.to_string();
    if msg.contains("UNIQUE constraint failed") {
        if msg.contains("professors.email") {
            return RepositoryError::AlreadyExists(format!(
                "professor email '{}'",
                professor.email
            ));
        }
        if msg.contains("professors.user_id") {
            return RepositoryError::AlreadyExists(format!(
                "professor profile for user {}",
                professor.user_id
            ));
        }
    }
    if msg.contains("FOREIGN KEY constraint failed") {
        return RepositoryError::Constraint(msg);
    }
    RepositoryError::Storage(msg)
}

#[async_trait]
impl ProfessorRepository for SqliteProfessorRepository {
    async fn list_by_department(
        &self,
        department_id: i64,
    ) -> Result<Vec<Professor>, RepositoryError> {
        let query = format!(
            "SELECT {PROFESSOR_SELECT_COLUMNS} FROM professors WHERE department_id = ? ORDER BY full_name"
        );

        let rows = sqlx::query(&query)
            .bind(department_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        rows.iter().map(row_to_professor).collect()
    }

    async fn get_by_user_id(&self, user_id: i64) -> Result<Professor, RepositoryError> {
        let query = format!("SELECT {PROFESSOR_SELECT_COLUMNS} FROM professors WHERE user_id = ?");

        let row = sqlx::query(&query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?
            .ok_or_else(|| {
                RepositoryError::NotFound(format!("Professor profile for user {user_id}"))
            })?;

        row_to_professor(&row)
    }

    async fn insert(&self, professor: &NewProfessor) -> Result<Professor, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO professors (user_id, department_id, full_name, email, phone_number, years_of_experience, has_phd) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(professor.user_id)
        .bind(professor.department_id)
        .bind(&professor.full_name)
        .bind(&professor.email)
        .bind(&professor.phone_number)
        .bind(i64::from(professor.years_of_experience))
        .bind(professor.has_phd)
        .execute(&self.pool)
        .await
        .map_err(|e| map_insert_error(&e, professor))?;

        self.get_by_id(result.last_insert_rowid()).await
    }
}
