//! Department repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Department, NewDepartment};

/// Repository for department persistence.
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    /// List all departments, ordered by code.
    async fn list(&self) -> Result<Vec<Department>, RepositoryError>;

    /// Get a department by its database ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if it doesn't exist.
    async fn get_by_id(&self, id: i64) -> Result<Department, RepositoryError>;

    /// Get a department by its code.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if no such department exists.
    async fn get_by_code(&self, code: &str) -> Result<Department, RepositoryError>;

    /// Get the department headed by the given user.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the user heads nothing.
    async fn get_headed_by(&self, user_id: i64) -> Result<Department, RepositoryError>;

    /// Insert a new department.
    ///
    /// Returns the persisted department with its assigned ID.
    /// Returns `Err(RepositoryError::AlreadyExists)` if the code is taken.
    async fn insert(&self, department: &NewDepartment) -> Result<Department, RepositoryError>;

    /// Update an existing department (including its head assignment).
    ///
    /// Returns `Err(RepositoryError::NotFound)` if it doesn't exist.
    async fn update(&self, department: &Department) -> Result<(), RepositoryError>;
}
