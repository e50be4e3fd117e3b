//! Row mapping helpers for `SQLite` queries.

use chrono::{DateTime, NaiveDateTime, Utc};
use provost_core::{
    CoursePlan, Curriculum, DegreeKind, Department, Professor, RepositoryError, Role, UserAccount,
};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

/// Shared SELECT column list for user queries.
pub const USER_SELECT_COLUMNS: &str =
    "id, username, password_hash, email, first_name, last_name, user_type, is_active, created_at";

/// Shared SELECT column list for department queries.
pub const DEPARTMENT_SELECT_COLUMNS: &str = "id, code, title, description, head_user_id";

/// Shared SELECT column list for professor queries.
pub const PROFESSOR_SELECT_COLUMNS: &str =
    "id, user_id, department_id, full_name, email, phone_number, years_of_experience, has_phd";

/// Shared SELECT column list for curriculum queries.
pub const CURRICULUM_SELECT_COLUMNS: &str = "id, curriculum_code, major_code, classification, degree_type, total_credits, department_id, courses_json, is_active, created_at, updated_at";

/// Parse stored datetime text. Accepts RFC 3339 as written by the
/// repositories, plus the space-separated `SQLite` format for rows created
/// by hand or by `datetime('now')`.
pub fn parse_datetime(raw: &str) -> Result<DateTime<Utc>, RepositoryError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw.trim_end_matches(" UTC"), "%Y-%m-%d %H:%M:%S%.f")
        .map(|dt| DateTime::<Utc>::from_naive_utc_and_offset(dt, Utc))
        .map_err(|e| RepositoryError::Storage(format!("Bad datetime '{raw}': {e}")))
}

/// Parse a database row into a `UserAccount`.
pub fn row_to_user(row: &SqliteRow) -> Result<UserAccount, RepositoryError> {
    let role_code: String = row
        .try_get("user_type")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;
    let role = Role::parse(&role_code)
        .ok_or_else(|| RepositoryError::Storage(format!("Unknown user_type '{role_code}'")))?;

    let created_at: String = row
        .try_get("created_at")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

    Ok(UserAccount {
        id: row
            .try_get("id")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        username: row
            .try_get("username")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        password_hash: row
            .try_get("password_hash")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        email: row
            .try_get("email")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        first_name: row
            .try_get("first_name")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        last_name: row
            .try_get("last_name")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        role,
        is_active: row
            .try_get("is_active")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        created_at: parse_datetime(&created_at)?,
    })
}

/// Parse a database row into a `Department`.
pub fn row_to_department(row: &SqliteRow) -> Result<Department, RepositoryError> {
    Ok(Department {
        id: row
            .try_get("id")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        code: row
            .try_get("code")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        title: row
            .try_get("title")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        description: row
            .try_get("description")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        head_user_id: row
            .try_get("head_user_id")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
    })
}

/// Parse a database row into a `Professor`.
pub fn row_to_professor(row: &SqliteRow) -> Result<Professor, RepositoryError> {
    let years: i64 = row
        .try_get("years_of_experience")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

    Ok(Professor {
        id: row
            .try_get("id")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        user_id: row
            .try_get("user_id")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        department_id: row
            .try_get("department_id")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        full_name: row
            .try_get("full_name")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        email: row
            .try_get("email")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        phone_number: row
            .try_get("phone_number")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        years_of_experience: u32::try_from(years)
            .map_err(|e| RepositoryError::Storage(format!("Bad years_of_experience: {e}")))?,
        has_phd: row
            .try_get("has_phd")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
    })
}

/// Parse a database row into a `Curriculum`.
pub fn row_to_curriculum(row: &SqliteRow) -> Result<Curriculum, RepositoryError> {
    let degree_code: String = row
        .try_get("degree_type")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;
    let degree = DegreeKind::parse(&degree_code)
        .ok_or_else(|| RepositoryError::Storage(format!("Unknown degree_type '{degree_code}'")))?;

    let total_credits: i64 = row
        .try_get("total_credits")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

    let courses_json: String = row
        .try_get("courses_json")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;
    let plan: CoursePlan = serde_json::from_str(&courses_json)
        .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

    let created_at: String = row
        .try_get("created_at")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;
    let updated_at: String = row
        .try_get("updated_at")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

    Ok(Curriculum {
        id: row
            .try_get("id")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        curriculum_code: row
            .try_get("curriculum_code")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        major_code: row
            .try_get("major_code")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        classification: row
            .try_get("classification")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        degree,
        total_credits: u32::try_from(total_credits)
            .map_err(|e| RepositoryError::Storage(format!("Bad total_credits: {e}")))?,
        department_id: row
            .try_get("department_id")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        plan,
        is_active: row
            .try_get("is_active")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        created_at: parse_datetime(&created_at)?,
        updated_at: parse_datetime(&updated_at)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datetime_parsing_accepts_both_stored_formats() {
        assert!(parse_datetime("2025-03-01T10:30:00+00:00").is_ok());
        assert!(parse_datetime("2025-03-01 10:30:00").is_ok());
        assert!(parse_datetime("2025-03-01 10:30:00.123").is_ok());
        assert!(parse_datetime("not a date").is_err());
    }
}
