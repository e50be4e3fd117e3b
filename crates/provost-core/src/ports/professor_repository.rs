//! Professor profile repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewProfessor, Professor};

/// Repository for professor profile persistence.
///
/// A profile hangs off exactly one user account; lookups by user ID are
/// how the services join the two.
#[async_trait]
pub trait ProfessorRepository: Send + Sync {
    /// List the professors of one department, ordered by full name.
    async fn list_by_department(
        &self,
        department_id: i64,
    ) -> Result<Vec<Professor>, RepositoryError>;

    /// Get the profile attached to a user account.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the user has none.
    async fn get_by_user_id(&self, user_id: i64) -> Result<Professor, RepositoryError>;

    /// Insert a new profile.
    ///
    /// Returns the persisted profile with its assigned ID.
    /// Returns `Err(RepositoryError::AlreadyExists)` if the user already has
    /// one, or the email is taken.
    async fn insert(&self, professor: &NewProfessor) -> Result<Professor, RepositoryError>;
}
