//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, spreadsheet files, HTTP).
//!
//! # Structure
//!
//! - `course` - course plans (`CoursePlan`, `Course`, per-term hour rules)
//! - `curriculum` - curricula (`Curriculum`, `NewCurriculum`, degree floors)
//! - `directory` - user accounts, departments, professors, roles

pub mod course;
pub mod curriculum;
pub mod directory;

// Re-export course types at the domain level for convenience
pub use course::{
    Course, CourseKind, CoursePlan, HOURS_PER_CREDIT, HourBreakdown, PlanError, PrereqTree,
    SemesterTerm,
};

// Re-export curriculum types at the domain level for convenience
pub use curriculum::{Curriculum, CurriculumError, CurriculumUpdate, DegreeKind, NewCurriculum};

// Re-export directory types at the domain level for convenience
pub use directory::{
    Actor, Department, DepartmentInfo, ExperienceLevel, NewDepartment, NewProfessor, NewUser,
    Professor, ProfessorInfo, Role, UserAccount, UserProfile,
};
