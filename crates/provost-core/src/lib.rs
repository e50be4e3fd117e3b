#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod manifest;
pub mod paths;
pub mod ports;
pub mod services;
pub mod utils;
pub mod workbook;

// Re-export commonly used types for convenience
pub use domain::{
    Actor, Course, CourseKind, CoursePlan, Curriculum, CurriculumError, CurriculumUpdate,
    DegreeKind, Department, DepartmentInfo, ExperienceLevel, HOURS_PER_CREDIT, HourBreakdown,
    NewCurriculum, NewDepartment, NewProfessor, NewUser, PlanError, PrereqTree, Professor,
    ProfessorInfo, Role, SemesterTerm, UserAccount, UserProfile,
};
pub use manifest::{IssueKind, Manifest, ManifestIssue, ManifestLine, Pin};
pub use ports::{
    CoreError, CurriculumRepository, DepartmentRepository, NoopWorkbookCodec, ProfessorRepository,
    Repos, RepositoryError, UserRepository, WorkbookCodec,
};
pub use services::{
    AppCore, AuthError, AuthService, CurriculumService, DirectoryService, NewDepartmentHead,
    NewProfessorAccount, NewSuperadmin, hash_password, verify_password,
};
pub use workbook::{COLUMNS, CellValue, ImportPreview, SheetTable, WorkbookError};

// Re-export path utilities
pub use paths::{
    DATA_DIR_ENV, DATABASE_ENV, PathError, ResolvedPaths, data_root, database_path,
    normalize_user_path,
};

// Silence unused dev-dependency warnings until we add mock-based tests
#[cfg(test)]
use mockall as _;
#[cfg(test)]
use tokio_test as _;
