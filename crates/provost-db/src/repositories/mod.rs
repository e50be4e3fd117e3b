//! Repository implementations using `SQLite`.
//!
//! These implementations encapsulate all SQL queries and database access.
//! The `SqlitePool` is confined to this module and never exposed through
//! the port trait signatures.

mod row_mappers;
mod sqlite_curriculum_repository;
mod sqlite_department_repository;
mod sqlite_professor_repository;
mod sqlite_user_repository;

pub use sqlite_curriculum_repository::SqliteCurriculumRepository;
pub use sqlite_department_repository::SqliteDepartmentRepository;
pub use sqlite_professor_repository::SqliteProfessorRepository;
pub use sqlite_user_repository::SqliteUserRepository;
