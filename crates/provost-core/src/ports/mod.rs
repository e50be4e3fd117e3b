//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - No spreadsheet-library types in any signature
//! - Repository traits are minimal and CRUD-focused; query and permission
//!   logic belongs in the services

pub mod curriculum_repository;
pub mod department_repository;
pub mod professor_repository;
pub mod user_repository;
pub mod workbook_codec;

use std::sync::Arc;
use thiserror::Error;

pub use curriculum_repository::CurriculumRepository;
pub use department_repository::DepartmentRepository;
pub use professor_repository::ProfessorRepository;
pub use user_repository::UserRepository;
pub use workbook_codec::{NoopWorkbookCodec, WorkbookCodec};

use crate::domain::{CurriculumError, PlanError};
use crate::workbook::WorkbookError;

/// Container for all repository trait objects.
///
/// Adapters build this once (see the db crate's factory) and hand it to
/// `AppCore`, so nothing above the ports ever names a concrete store.
#[derive(Clone)]
pub struct Repos {
    /// Account storage, including credentials.
    pub users: Arc<dyn UserRepository>,
    /// Department registry.
    pub departments: Arc<dyn DepartmentRepository>,
    /// Professor profiles.
    pub professors: Arc<dyn ProfessorRepository>,
    /// Curricula with their embedded course plans.
    pub curricula: Arc<dyn CurriculumRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(
        users: Arc<dyn UserRepository>,
        departments: Arc<dyn DepartmentRepository>,
        professors: Arc<dyn ProfessorRepository>,
        curricula: Arc<dyn CurriculumRepository>,
    ) -> Self {
        Self {
            users,
            departments,
            professors,
            curricula,
        }
    }
}

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g.,
/// sqlx errors) and gives services a clean surface to handle storage
/// failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An entity with the same identifier already exists.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A constraint was violated (e.g., foreign key, unique constraint).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Core error type for semantic domain errors.
///
/// This is the canonical error type used across the core. Adapters map it
/// to their own surfaces (HTTP status codes, CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// A course plan violated its invariants.
    #[error(transparent)]
    Plan(#[from] PlanError),

    /// A curriculum violated its invariants.
    #[error(transparent)]
    Curriculum(#[from] CurriculumError),

    /// Workbook decode, interpretation, or encode failed.
    #[error(transparent)]
    Workbook(#[from] WorkbookError),

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),

    /// The caller is authenticated but not allowed to do this.
    #[error("{0}")]
    Forbidden(String),

    /// Internal error (unexpected condition).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// The standing refusal, word for word.
    pub(crate) fn forbidden() -> Self {
        Self::Forbidden("You do not have permission to perform this action".to_string())
    }
}
