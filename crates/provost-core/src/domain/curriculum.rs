//! Curriculum domain types.
//!
//! A curriculum binds a course plan to a department, a degree, and the
//! credit total required for graduation. Use `NewCurriculum` for curricula
//! that haven't been persisted yet.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::course::{CoursePlan, PlanError};

/// Validation errors for curricula.
#[derive(Debug, Error)]
pub enum CurriculumError {
    /// The curriculum code is empty.
    #[error("Curriculum code is required")]
    MissingCode,

    /// The major code is empty.
    #[error("Major code is required")]
    MissingMajorCode,

    /// Total credits below the floor for the degree.
    #[error("{degree} degree must have at least {min} credits")]
    CreditFloor { degree: DegreeKind, min: u32 },

    /// The embedded course plan is invalid.
    #[error(transparent)]
    Plan(#[from] PlanError),
}

/// The degree a curriculum leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DegreeKind {
    #[serde(rename = "BSC")]
    Bachelors,
    #[serde(rename = "MSC")]
    Masters,
}

impl DegreeKind {
    /// Parse a degree from its stored code or human label.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BSC" | "BACHELORS" => Some(Self::Bachelors),
            "MSC" | "MASTERS" => Some(Self::Masters),
            _ => None,
        }
    }

    /// Stored three-letter code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Bachelors => "BSC",
            Self::Masters => "MSC",
        }
    }

    /// Minimum total credits required for graduation with this degree.
    #[must_use]
    pub const fn min_credits(&self) -> u32 {
        match self {
            Self::Bachelors => 120,
            Self::Masters => 30,
        }
    }
}

impl std::fmt::Display for DegreeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bachelors => write!(f, "Bachelors"),
            Self::Masters => write!(f, "Masters"),
        }
    }
}

/// A curriculum that exists in the system with a database ID.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Curriculum {
    /// Database ID of the curriculum.
    pub id: i64,
    /// Unique curriculum code (e.g. "60610800"). Workbook imports use the
    /// file stem as this code.
    pub curriculum_code: String,
    /// Major code (e.g. "CS2024").
    pub major_code: String,
    /// Classification label (e.g. "ICT Engineer"). May be empty.
    pub classification: String,
    /// Degree this curriculum leads to.
    #[serde(rename = "degree_type")]
    pub degree: DegreeKind,
    /// Total credits required for graduation. This is a degree requirement,
    /// not the sum of plan credits; a partial plan is legal.
    pub total_credits: u32,
    /// Owning department.
    pub department_id: i64,
    /// The course plan.
    #[serde(rename = "courses_data")]
    pub plan: CoursePlan,
    /// Inactive curricula are kept for reference but no longer offered.
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A curriculum to be inserted (no ID yet).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCurriculum {
    pub curriculum_code: String,
    pub major_code: String,
    #[serde(default)]
    pub classification: String,
    #[serde(rename = "degree_type")]
    pub degree: DegreeKind,
    pub total_credits: u32,
    pub department_id: i64,
    #[serde(rename = "courses_data", default)]
    pub plan: CoursePlan,
}

/// Partial update of curriculum metadata. The plan is changed through the
/// course operations or a workbook import, never through this struct.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurriculumUpdate {
    pub major_code: Option<String>,
    pub classification: Option<String>,
    #[serde(rename = "degree_type")]
    pub degree: Option<DegreeKind>,
    pub total_credits: Option<u32>,
    pub is_active: Option<bool>,
}

/// Shared validation for persisted and not-yet-persisted curricula.
fn validate_fields(
    curriculum_code: &str,
    major_code: &str,
    degree: DegreeKind,
    total_credits: u32,
    plan: &CoursePlan,
) -> Result<(), CurriculumError> {
    if curriculum_code.trim().is_empty() {
        return Err(CurriculumError::MissingCode);
    }
    if major_code.trim().is_empty() {
        return Err(CurriculumError::MissingMajorCode);
    }
    if total_credits < degree.min_credits() {
        return Err(CurriculumError::CreditFloor {
            degree,
            min: degree.min_credits(),
        });
    }
    plan.validate()?;
    Ok(())
}

impl NewCurriculum {
    /// Check all curriculum invariants, including the embedded plan.
    pub fn validate(&self) -> Result<(), CurriculumError> {
        validate_fields(
            &self.curriculum_code,
            &self.major_code,
            self.degree,
            self.total_credits,
            &self.plan,
        )
    }
}

impl Curriculum {
    /// Check all curriculum invariants, including the embedded plan.
    pub fn validate(&self) -> Result<(), CurriculumError> {
        validate_fields(
            &self.curriculum_code,
            &self.major_code,
            self.degree,
            self.total_credits,
            &self.plan,
        )
    }

    /// Apply a metadata update in place. The result still needs
    /// [`Curriculum::validate`] before persisting.
    pub fn apply(&mut self, update: CurriculumUpdate) {
        if let Some(major_code) = update.major_code {
            self.major_code = major_code;
        }
        if let Some(classification) = update.classification {
            self.classification = classification;
        }
        if let Some(degree) = update.degree {
            self.degree = degree;
        }
        if let Some(total_credits) = update.total_credits {
            self.total_credits = total_credits;
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
    }
}
