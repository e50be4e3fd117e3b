//! Curriculum service - plans, course edits, and workbook exchange.

use std::sync::Arc;

use crate::domain::{Actor, Course, CoursePlan, Curriculum, CurriculumUpdate, NewCurriculum, PrereqTree};
use crate::ports::{CoreError, CurriculumRepository, WorkbookCodec};
use crate::workbook::{self, ImportPreview};

/// Service for curriculum management.
///
/// All plan manipulation goes through [`CoursePlan`]'s own operations; this
/// service adds permission checks, persistence, and the workbook codec.
pub struct CurriculumService {
    curricula: Arc<dyn CurriculumRepository>,
    codec: Arc<dyn WorkbookCodec>,
}

impl CurriculumService {
    /// Create a new curriculum service.
    pub fn new(curricula: Arc<dyn CurriculumRepository>, codec: Arc<dyn WorkbookCodec>) -> Self {
        Self { curricula, codec }
    }

    /// Writes need the superadmin or the head of the owning department.
    fn ensure_can_write(actor: &Actor, department_id: i64) -> Result<(), CoreError> {
        if actor.is_superadmin() || actor.manages_department(department_id) {
            Ok(())
        } else {
            Err(CoreError::forbidden())
        }
    }

    /// Write back and return the stored row (with fresh timestamps).
    async fn persist(&self, curriculum: &Curriculum) -> Result<Curriculum, CoreError> {
        self.curricula.update(curriculum).await?;
        self.curricula
            .get_by_code(&curriculum.curriculum_code)
            .await
            .map_err(CoreError::from)
    }

    // ─────────────────────────────────────────────────────────────────────
    // CRUD
    // ─────────────────────────────────────────────────────────────────────

    /// List all curricula.
    pub async fn list(&self) -> Result<Vec<Curriculum>, CoreError> {
        self.curricula.list().await.map_err(CoreError::from)
    }

    /// Get a curriculum by code.
    pub async fn get(&self, code: &str) -> Result<Curriculum, CoreError> {
        self.curricula.get_by_code(code).await.map_err(CoreError::from)
    }

    /// Create a curriculum in the caller's department (or anywhere, for
    /// superadmins).
    pub async fn create(
        &self,
        actor: &Actor,
        curriculum: NewCurriculum,
    ) -> Result<Curriculum, CoreError> {
        Self::ensure_can_write(actor, curriculum.department_id)?;
        curriculum.validate()?;
        self.curricula.insert(&curriculum).await.map_err(CoreError::from)
    }

    /// Apply a partial update and return the stored result.
    pub async fn update(
        &self,
        actor: &Actor,
        code: &str,
        update: CurriculumUpdate,
    ) -> Result<Curriculum, CoreError> {
        let mut curriculum = self.curricula.get_by_code(code).await?;
        Self::ensure_can_write(actor, curriculum.department_id)?;
        curriculum.apply(update);
        curriculum.validate()?;
        self.persist(&curriculum).await
    }

    /// Delete a curriculum. Superadmins only.
    pub async fn delete(&self, actor: &Actor, code: &str) -> Result<(), CoreError> {
        if !actor.is_superadmin() {
            return Err(CoreError::forbidden());
        }
        self.curricula.delete_by_code(code).await.map_err(CoreError::from)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Course operations
    // ─────────────────────────────────────────────────────────────────────

    /// Add a course to a curriculum's plan.
    pub async fn add_course(
        &self,
        actor: &Actor,
        code: &str,
        course: Course,
    ) -> Result<Curriculum, CoreError> {
        let mut curriculum = self.curricula.get_by_code(code).await?;
        Self::ensure_can_write(actor, curriculum.department_id)?;
        curriculum.plan.add_course(course)?;
        self.persist(&curriculum).await
    }

    /// Replace a course within a curriculum's plan.
    pub async fn update_course(
        &self,
        actor: &Actor,
        code: &str,
        course: Course,
    ) -> Result<Curriculum, CoreError> {
        let mut curriculum = self.curricula.get_by_code(code).await?;
        Self::ensure_can_write(actor, curriculum.department_id)?;
        curriculum.plan.update_course(course)?;
        self.persist(&curriculum).await
    }

    /// Remove a course from a curriculum's plan.
    pub async fn remove_course(
        &self,
        actor: &Actor,
        code: &str,
        course_code: &str,
    ) -> Result<Curriculum, CoreError> {
        let mut curriculum = self.curricula.get_by_code(code).await?;
        Self::ensure_can_write(actor, curriculum.department_id)?;
        curriculum.plan.remove_course(course_code)?;
        self.persist(&curriculum).await
    }

    /// Courses running in one semester of a curriculum.
    pub async fn semester_courses(
        &self,
        code: &str,
        semester: u8,
    ) -> Result<Vec<Course>, CoreError> {
        let curriculum = self.curricula.get_by_code(code).await?;
        Ok(curriculum
            .plan
            .courses_in_semester(semester)
            .into_iter()
            .cloned()
            .collect())
    }

    /// The prerequisite tree of one course.
    pub async fn prerequisite_tree(
        &self,
        code: &str,
        course_code: &str,
    ) -> Result<PrereqTree, CoreError> {
        let curriculum = self.curricula.get_by_code(code).await?;
        curriculum
            .plan
            .prerequisite_tree(course_code)
            .map_err(CoreError::from)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Workbook exchange
    // ─────────────────────────────────────────────────────────────────────

    /// Decode uploaded workbook bytes into a validated plan plus advisory
    /// warnings, committing nothing.
    pub fn import_preview(&self, bytes: &[u8]) -> Result<ImportPreview, CoreError> {
        let table = self.codec.decode(bytes)?;
        workbook::preview(&table).map_err(CoreError::from)
    }

    /// Replace a curriculum's plan with an imported one.
    pub async fn import_commit(
        &self,
        actor: &Actor,
        code: &str,
        plan: CoursePlan,
    ) -> Result<Curriculum, CoreError> {
        plan.validate()?;
        let mut curriculum = self.curricula.get_by_code(code).await?;
        Self::ensure_can_write(actor, curriculum.department_id)?;
        curriculum.plan = plan;
        self.persist(&curriculum).await
    }

    /// Encode a curriculum's plan as workbook bytes.
    pub async fn export(&self, code: &str) -> Result<Vec<u8>, CoreError> {
        let curriculum = self.curricula.get_by_code(code).await?;
        let table = workbook::plan_to_table(&curriculum.plan);
        self.codec.encode(&table).map_err(CoreError::from)
    }

    /// Encode the starter template as workbook bytes.
    pub fn template(&self) -> Result<Vec<u8>, CoreError> {
        self.codec
            .encode(&workbook::template_table())
            .map_err(CoreError::from)
    }
}
