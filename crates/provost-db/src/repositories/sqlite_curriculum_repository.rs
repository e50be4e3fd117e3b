//! `SQLite` implementation of the `CurriculumRepository` trait.
//!
//! Course plans are stored in the `courses_json` column as one JSON
//! document per curriculum. Plans are always read and written whole, so
//! nothing here queries inside the document.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use provost_core::{Curriculum, CurriculumRepository, NewCurriculum, RepositoryError};

use super::row_mappers::{CURRICULUM_SELECT_COLUMNS, row_to_curriculum};

/// `SQLite` implementation of the `CurriculumRepository` trait.
pub struct SqliteCurriculumRepository {
    pool: SqlitePool,
}

impl SqliteCurriculumRepository {
    /// Create a new `SQLite` curriculum repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Map `SQLx` errors from an insert to `RepositoryError`.
fn map_insert_error(e: &sqlx::Error, code: &str) -> RepositoryError {
    let msg = e.to_string();
    if msg.contains("UNIQUE constraint failed") && msg.contains("curricula.curriculum_code") {
        return RepositoryError::AlreadyExists(format!("curriculum '{code}'"));
    }
    if msg.contains("FOREIGN KEY constraint failed") {
        return RepositoryError::Constraint(msg);
    }
    RepositoryError::Storage(msg)
}

#[async_trait]
impl CurriculumRepository for SqliteCurriculumRepository {
    async fn list(&self) -> Result<Vec<Curriculum>, RepositoryError> {
        let query =
            format!("SELECT {CURRICULUM_SELECT_COLUMNS} FROM curricula ORDER BY curriculum_code");

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        rows.iter().map(row_to_curriculum).collect()
    }

    async fn get_by_code(&self, code: &str) -> Result<Curriculum, RepositoryError> {
        let query =
            format!("SELECT {CURRICULUM_SELECT_COLUMNS} FROM curricula WHERE curriculum_code = ?");

        let row = sqlx::query(&query)
            .bind(code)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?
            .ok_or_else(|| RepositoryError::NotFound(format!("Curriculum '{code}'")))?;

        row_to_curriculum(&row)
    }

    async fn insert(&self, curriculum: &NewCurriculum) -> Result<Curriculum, RepositoryError> {
        let courses_json = serde_json::to_string(&curriculum.plan)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO curricula (curriculum_code, major_code, classification, degree_type, total_credits, department_id, courses_json, is_active, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, 1, ?, ?)",
        )
        .bind(&curriculum.curriculum_code)
        .bind(&curriculum.major_code)
        .bind(&curriculum.classification)
        .bind(curriculum.degree.code())
        .bind(i64::from(curriculum.total_credits))
        .bind(curriculum.department_id)
        .bind(&courses_json)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(|e| map_insert_error(&e, &curriculum.curriculum_code))?;

        self.get_by_code(&curriculum.curriculum_code).await
    }

    async fn update(&self, curriculum: &Curriculum) -> Result<(), RepositoryError> {
        let courses_json = serde_json::to_string(&curriculum.plan)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        let result = sqlx::query(
            "UPDATE curricula SET major_code = ?, classification = ?, degree_type = ?, total_credits = ?, courses_json = ?, is_active = ?, updated_at = ? WHERE id = ?",
        )
        .bind(&curriculum.major_code)
        .bind(&curriculum.classification)
        .bind(curriculum.degree.code())
        .bind(i64::from(curriculum.total_credits))
        .bind(&courses_json)
        .bind(curriculum.is_active)
        .bind(Utc::now().to_rfc3339())
        .bind(curriculum.id)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!(
                "Curriculum with ID {}",
                curriculum.id
            )));
        }

        Ok(())
    }

    async fn delete_by_code(&self, code: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM curricula WHERE curriculum_code = ?")
            .bind(code)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Curriculum '{code}'")));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::SqliteDepartmentRepository;
    use crate::setup::setup_test_database;
    use provost_core::{
        Course, CourseKind, CoursePlan, DegreeKind, DepartmentRepository, HourBreakdown,
        NewDepartment, SemesterTerm,
    };

    async fn seed_department(pool: &SqlitePool) -> i64 {
        SqliteDepartmentRepository::new(pool.clone())
            .insert(&NewDepartment {
                code: "CS".to_string(),
                title: "Computer Science".to_string(),
                description: String::new(),
            })
            .await
            .unwrap()
            .id
    }

    fn sample_plan() -> CoursePlan {
        CoursePlan::from_courses([Course {
            code: "CS101".to_string(),
            name: "Introduction to Programming".to_string(),
            kind: CourseKind::Mandatory,
            semesters: vec![SemesterTerm {
                semester: 1,
                credits: 3,
                hours: HourBreakdown {
                    lecture: 30,
                    lab: 15,
                    practice: 15,
                    seminar: 0,
                    individual: 30,
                },
            }],
            prerequisites: Vec::new(),
        }])
    }

    fn new_curriculum(code: &str, department_id: i64) -> NewCurriculum {
        NewCurriculum {
            curriculum_code: code.to_string(),
            major_code: "CS2024".to_string(),
            classification: String::new(),
            degree: DegreeKind::Bachelors,
            total_credits: 120,
            department_id,
            plan: sample_plan(),
        }
    }

    #[tokio::test]
    async fn test_plan_survives_the_json_column() {
        let pool = setup_test_database().await.unwrap();
        let dept = seed_department(&pool).await;
        let repo = SqliteCurriculumRepository::new(pool);

        let stored = repo.insert(&new_curriculum("60610800", dept)).await.unwrap();
        assert_eq!(stored.plan, sample_plan());
        assert!(stored.is_active);

        let fetched = repo.get_by_code("60610800").await.unwrap();
        assert_eq!(fetched.plan.get("CS101").unwrap().semesters[0].credits, 3);
    }

    #[tokio::test]
    async fn test_update_refreshes_updated_at() {
        let pool = setup_test_database().await.unwrap();
        let dept = seed_department(&pool).await;
        let repo = SqliteCurriculumRepository::new(pool);

        let mut stored = repo.insert(&new_curriculum("60610800", dept)).await.unwrap();
        stored.total_credits = 130;
        repo.update(&stored).await.unwrap();

        let fetched = repo.get_by_code("60610800").await.unwrap();
        assert_eq!(fetched.total_credits, 130);
        assert!(fetched.updated_at >= stored.updated_at);
    }

    #[tokio::test]
    async fn test_duplicate_curriculum_code_is_a_conflict() {
        let pool = setup_test_database().await.unwrap();
        let dept = seed_department(&pool).await;
        let repo = SqliteCurriculumRepository::new(pool);

        repo.insert(&new_curriculum("60610800", dept)).await.unwrap();
        let err = repo
            .insert(&new_curriculum("60610800", dept))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn test_insert_requires_a_real_department() {
        let pool = setup_test_database().await.unwrap();
        let repo = SqliteCurriculumRepository::new(pool);

        let err = repo.insert(&new_curriculum("60610800", 999)).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Constraint(_)));
    }

    #[tokio::test]
    async fn test_delete_by_code() {
        let pool = setup_test_database().await.unwrap();
        let dept = seed_department(&pool).await;
        let repo = SqliteCurriculumRepository::new(pool);

        repo.insert(&new_curriculum("60610800", dept)).await.unwrap();
        repo.delete_by_code("60610800").await.unwrap();

        assert!(matches!(
            repo.delete_by_code("60610800").await,
            Err(RepositoryError::NotFound(_))
        ));
    }
}
