//! Curriculum repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Curriculum, NewCurriculum};

/// Repository for curriculum persistence.
///
/// The embedded course plan is stored opaquely (serialized) by
/// implementations; plan validation happens in the services before
/// anything reaches this trait.
#[async_trait]
pub trait CurriculumRepository: Send + Sync {
    /// List all curricula, ordered by code.
    async fn list(&self) -> Result<Vec<Curriculum>, RepositoryError>;

    /// Get a curriculum by its code.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if no such curriculum exists.
    async fn get_by_code(&self, code: &str) -> Result<Curriculum, RepositoryError>;

    /// Insert a new curriculum.
    ///
    /// Returns the persisted curriculum with its assigned ID.
    /// Returns `Err(RepositoryError::AlreadyExists)` if the code is taken.
    async fn insert(&self, curriculum: &NewCurriculum) -> Result<Curriculum, RepositoryError>;

    /// Update an existing curriculum (fields and plan alike).
    ///
    /// Returns `Err(RepositoryError::NotFound)` if it doesn't exist.
    async fn update(&self, curriculum: &Curriculum) -> Result<(), RepositoryError>;

    /// Delete a curriculum by its code.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if it doesn't exist.
    async fn delete_by_code(&self, code: &str) -> Result<(), RepositoryError>;
}
