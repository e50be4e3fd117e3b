//! Core services - the application's business logic layer.
//!
//! This module contains high-level service abstractions that orchestrate
//! between ports (trait interfaces) and domain logic. Services here are
//! pure orchestrators - they don't know about concrete implementations.

mod app_core;
mod auth;
mod curriculum;
mod directory;

pub use app_core::AppCore;
pub use auth::{hash_password, verify_password, AuthError, AuthService};
pub use curriculum::CurriculumService;
pub use directory::{DirectoryService, NewDepartmentHead, NewProfessorAccount, NewSuperadmin};
