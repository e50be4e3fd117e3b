//! Directory domain types: user accounts, departments, and professors.
//!
//! Access control across the whole system is derived from [`Role`] plus, for
//! department heads, the department they head. The [`Actor`] struct captures
//! exactly that for an authenticated caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Roles and Actors
// ─────────────────────────────────────────────────────────────────────────────

/// Account role. Stored and serialized as the two-letter codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "SA")]
    Superadmin,
    #[serde(rename = "DH")]
    DepartmentHead,
    #[serde(rename = "PR")]
    Professor,
}

impl Role {
    /// Parse a role from its stored code.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "SA" => Some(Self::Superadmin),
            "DH" => Some(Self::DepartmentHead),
            "PR" => Some(Self::Professor),
            _ => None,
        }
    }

    /// Stored two-letter code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Superadmin => "SA",
            Self::DepartmentHead => "DH",
            Self::Professor => "PR",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Superadmin => "Superadmin",
            Self::DepartmentHead => "Department Head",
            Self::Professor => "Professor/Teacher",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// An authenticated caller, as seen by the services.
///
/// Built by the adapters after credential verification; carries just enough
/// to evaluate permissions without further lookups.
#[derive(Debug, Clone)]
pub struct Actor {
    pub user_id: i64,
    pub username: String,
    pub role: Role,
    /// ID of the department this actor heads, when the role is
    /// `DepartmentHead` and a department is assigned.
    pub headed_department: Option<i64>,
}

impl Actor {
    #[must_use]
    pub const fn is_superadmin(&self) -> bool {
        matches!(self.role, Role::Superadmin)
    }

    /// Whether this actor may write to data owned by the given department.
    #[must_use]
    pub fn manages_department(&self, department_id: i64) -> bool {
        self.is_superadmin() || self.headed_department == Some(department_id)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// User Accounts
// ─────────────────────────────────────────────────────────────────────────────

/// A user account with a database ID.
///
/// The password hash never leaves the system: it is skipped during
/// serialization and absent from all profile types.
#[derive(Debug, Clone, Serialize)]
pub struct UserAccount {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "user_type")]
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl UserAccount {
    /// First and last name joined, trimmed of stray whitespace.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// A user account to be inserted (no ID yet). The password is already
/// hashed by the time this struct exists.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

// ─────────────────────────────────────────────────────────────────────────────
// Departments
// ─────────────────────────────────────────────────────────────────────────────

/// An academic department.
#[derive(Debug, Clone, Serialize)]
pub struct Department {
    pub id: i64,
    /// Short unique code (e.g. "CS").
    pub code: String,
    pub title: String,
    pub description: String,
    /// User ID of the department head, when one is assigned. The referenced
    /// user must hold the [`Role::DepartmentHead`] role.
    pub head_user_id: Option<i64>,
}

/// A department to be inserted (no ID, no head yet).
#[derive(Debug, Clone, Deserialize)]
pub struct NewDepartment {
    pub code: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Compact department reference used inside profiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentInfo {
    pub code: String,
    pub title: String,
}

impl From<&Department> for DepartmentInfo {
    fn from(d: &Department) -> Self {
        Self {
            code: d.code.clone(),
            title: d.title.clone(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Professors
// ─────────────────────────────────────────────────────────────────────────────

/// Experience bands derived from years of experience.
///
/// Never stored: always recomputed from `years_of_experience` so the two can
/// not drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[serde(rename = "BG")]
    Beginner,
    #[serde(rename = "IN")]
    Intermediate,
    #[serde(rename = "EX")]
    Experienced,
}

impl ExperienceLevel {
    /// Derive the band: under a year is beginner, five or more years is
    /// experienced, everything between is intermediate.
    #[must_use]
    pub const fn from_years(years: u32) -> Self {
        match years {
            0 => Self::Beginner,
            1..=4 => Self::Intermediate,
            _ => Self::Experienced,
        }
    }

    /// Stored two-letter code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Beginner => "BG",
            Self::Intermediate => "IN",
            Self::Experienced => "EX",
        }
    }
}

/// A professor profile attached to a user account.
#[derive(Debug, Clone, Serialize)]
pub struct Professor {
    pub id: i64,
    /// The owning user account.
    pub user_id: i64,
    /// Department the professor belongs to. `None` after the department was
    /// deleted out from under them.
    pub department_id: Option<i64>,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub years_of_experience: u32,
    pub has_phd: bool,
}

impl Professor {
    /// Experience band derived from `years_of_experience`.
    #[must_use]
    pub const fn experience_level(&self) -> ExperienceLevel {
        ExperienceLevel::from_years(self.years_of_experience)
    }
}

/// A professor profile to be inserted (no ID yet).
#[derive(Debug, Clone)]
pub struct NewProfessor {
    pub user_id: i64,
    pub department_id: Option<i64>,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub years_of_experience: u32,
    pub has_phd: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Profiles
// ─────────────────────────────────────────────────────────────────────────────

/// Professor details embedded in a profile response.
#[derive(Debug, Clone, Serialize)]
pub struct ProfessorInfo {
    pub full_name: String,
    pub department: Option<DepartmentInfo>,
    pub experience_level: ExperienceLevel,
    pub has_phd: bool,
}

/// The profile returned after login and from the "who am I" endpoint.
///
/// `department_info` is filled for department heads, `professor_info` for
/// professors; both stay `None` for superadmins.
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "user_type")]
    pub role: Role,
    pub is_superuser: bool,
    pub department_info: Option<DepartmentInfo>,
    pub professor_info: Option<ProfessorInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn experience_level_bands() {
        assert_eq!(ExperienceLevel::from_years(0), ExperienceLevel::Beginner);
        assert_eq!(
            ExperienceLevel::from_years(1),
            ExperienceLevel::Intermediate
        );
        assert_eq!(
            ExperienceLevel::from_years(4),
            ExperienceLevel::Intermediate
        );
        assert_eq!(
            ExperienceLevel::from_years(5),
            ExperienceLevel::Experienced
        );
        assert_eq!(
            ExperienceLevel::from_years(40),
            ExperienceLevel::Experienced
        );
    }

    #[test]
    fn role_codes_round_trip() {
        for role in [Role::Superadmin, Role::DepartmentHead, Role::Professor] {
            assert_eq!(Role::parse(role.code()), Some(role));
        }
        assert_eq!(Role::parse("XX"), None);
    }

    #[test]
    fn actor_permissions() {
        let admin = Actor {
            user_id: 1,
            username: "root".to_string(),
            role: Role::Superadmin,
            headed_department: None,
        };
        assert!(admin.manages_department(7));

        let head = Actor {
            user_id: 2,
            username: "head".to_string(),
            role: Role::DepartmentHead,
            headed_department: Some(7),
        };
        assert!(head.manages_department(7));
        assert!(!head.manages_department(8));

        let prof = Actor {
            user_id: 3,
            username: "prof".to_string(),
            role: Role::Professor,
            headed_department: None,
        };
        assert!(!prof.manages_department(7));
    }

    #[test]
    fn password_hash_never_serializes() {
        let user = UserAccount {
            id: 1,
            username: "root".to_string(),
            password_hash: "$2b$12$secret".to_string(),
            email: "root@example.edu".to_string(),
            first_name: "Root".to_string(),
            last_name: "User".to_string(),
            role: Role::Superadmin,
            is_active: true,
            created_at: chrono::Utc::now(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("secret"));
        assert!(json.contains("\"user_type\":\"SA\""));
    }

    #[test]
    fn full_name_trims_missing_parts() {
        let mut user = UserAccount {
            id: 1,
            username: "tchalla".to_string(),
            password_hash: String::new(),
            email: "tchalla@example.edu".to_string(),
            first_name: "T'Challa".to_string(),
            last_name: String::new(),
            role: Role::Professor,
            is_active: true,
            created_at: chrono::Utc::now(),
        };
        assert_eq!(user.full_name(), "T'Challa");
        user.last_name = "Udaku".to_string();
        assert_eq!(user.full_name(), "T'Challa Udaku");
    }
}
