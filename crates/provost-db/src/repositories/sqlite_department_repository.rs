//! `SQLite` implementation of the `DepartmentRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use provost_core::{Department, DepartmentRepository, NewDepartment, RepositoryError};

use super::row_mappers::{DEPARTMENT_SELECT_COLUMNS, row_to_department};

/// `SQLite` implementation of the `DepartmentRepository` trait.
pub struct SqliteDepartmentRepository {
    pool: SqlitePool,
}

impl SqliteDepartmentRepository {
    /// Create a new `SQLite` department repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Map `SQLx` errors from an insert to `RepositoryError`.
fn map_insert_error(e: &sqlx::Error, code: &str) -> RepositoryError {
    let msg = e.to_string();
    if msg.contains("UNIQUE constraint failed") && msg.contains("departments.code") {
        return RepositoryError::AlreadyExists(format!("department '{code}'"));
    }
    RepositoryError::Storage(msg)
}

#[async_trait]
impl DepartmentRepository for SqliteDepartmentRepository {
    async fn list(&self) -> Result<Vec<Department>, RepositoryError> {
        let query = format!("SELECT {DEPARTMENT_SELECT_COLUMNS} FROM departments ORDER BY code");

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        rows.iter().map(row_to_department).collect()
    }

    async fn get_by_id(&self, id: i64) -> Result<Department, RepositoryError> {
        let query = format!("SELECT {DEPARTMENT_SELECT_COLUMNS} FROM departments WHERE id = ?");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?
            .ok_or_else(|| RepositoryError::NotFound(format!("Department with ID {id}")))?;

        row_to_department(&row)
    }

    async fn get_by_code(&self, code: &str) -> Result<Department, RepositoryError> {
        let query = format!("SELECT {DEPARTMENT_SELECT_COLUMNS} FROM departments WHERE code = ?");

        let row = sqlx::query(&query)
            .bind(code)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?
            .ok_or_else(|| RepositoryError::NotFound(format!("Department '{code}'")))?;

        row_to_department(&row)
    }

    async fn get_headed_by(&self, user_id: i64) -> Result<Department, RepositoryError> {
        let query =
            format!("SELECT {DEPARTMENT_SELECT_COLUMNS} FROM departments WHERE head_user_id = ?");

        let row = sqlx::query(&query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?
            .ok_or_else(|| {
                RepositoryError::NotFound(format!("Department headed by user {user_id}"))
            })?;

        row_to_department(&row)
    }

    async fn insert(&self, department: &NewDepartment) -> Result<Department, RepositoryError> {
        let result =
            sqlx::query("INSERT INTO departments (code, title, description) VALUES (?, ?, ?)")
                .bind(&department.code)
                .bind(&department.title)
                .bind(&department.description)
                .execute(&self.pool)
                .await
                .map_err(|e| map_insert_error(&e, &department.code))?;

        self.get_by_id(result.last_insert_rowid()).await
    }

    async fn update(&self, department: &Department) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE departments SET code = ?, title = ?, description = ?, head_user_id = ? WHERE id = ?",
        )
        .bind(&department.code)
        .bind(&department.title)
        .bind(&department.description)
        .bind(department.head_user_id)
        .bind(department.id)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!(
                "Department with ID {}",
                department.id
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::SqliteUserRepository;
    use crate::setup::setup_test_database;
    use provost_core::{NewUser, Role, UserRepository};

    fn department(code: &str, title: &str) -> NewDepartment {
        NewDepartment {
            code: code.to_string(),
            title: title.to_string(),
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_code() {
        let pool = setup_test_database().await.unwrap();
        let repo = SqliteDepartmentRepository::new(pool);

        repo.insert(&department("PHYS", "Physics")).await.unwrap();
        repo.insert(&department("CS", "Computer Science"))
            .await
            .unwrap();

        let all = repo.list().await.unwrap();
        let codes: Vec<&str> = all.iter().map(|d| d.code.as_str()).collect();
        assert_eq!(codes, ["CS", "PHYS"]);
    }

    #[tokio::test]
    async fn test_duplicate_code_is_a_conflict() {
        let pool = setup_test_database().await.unwrap();
        let repo = SqliteDepartmentRepository::new(pool);

        repo.insert(&department("CS", "Computer Science"))
            .await
            .unwrap();
        let err = repo
            .insert(&department("CS", "Cognitive Science"))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn test_head_assignment_round_trips() {
        let pool = setup_test_database().await.unwrap();
        let users = SqliteUserRepository::new(pool.clone());
        let repo = SqliteDepartmentRepository::new(pool);

        let head = users
            .insert(&NewUser {
                username: "head".to_string(),
                password_hash: "$2b$04$notarealhash".to_string(),
                email: "head@example.edu".to_string(),
                first_name: String::new(),
                last_name: String::new(),
                role: Role::DepartmentHead,
            })
            .await
            .unwrap();

        let mut dept = repo.insert(&department("CS", "Computer Science")).await.unwrap();
        assert_eq!(dept.head_user_id, None);
        assert!(repo.get_headed_by(head.id).await.is_err());

        dept.head_user_id = Some(head.id);
        repo.update(&dept).await.unwrap();

        let headed = repo.get_headed_by(head.id).await.unwrap();
        assert_eq!(headed.id, dept.id);
    }
}
