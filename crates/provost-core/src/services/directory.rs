//! Directory service - departments, heads, and professor rosters.
//!
//! Orchestrates account creation with its side effects (head assignment,
//! professor profiles) and assembles the composite profile view that the
//! HTTP adapter serves from login and `/auth/me`.

use std::sync::Arc;

use serde::Deserialize;

use super::auth::hash_password;
use crate::domain::{
    Actor, Department, DepartmentInfo, NewDepartment, NewProfessor, NewUser, Professor,
    ProfessorInfo, Role, UserAccount, UserProfile,
};
use crate::ports::{
    CoreError, DepartmentRepository, ProfessorRepository, RepositoryError, UserRepository,
};

/// Request to create a department head account and put it in charge of a
/// department.
#[derive(Debug, Clone, Deserialize)]
pub struct NewDepartmentHead {
    pub username: String,
    pub password: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub department_code: String,
}

/// Request to create a professor account together with its profile.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProfessorAccount {
    pub username: String,
    pub password: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub department_code: String,
    pub phone_number: String,
    pub years_of_experience: u32,
    pub has_phd: bool,
}

/// Request to create a superadmin account.
#[derive(Debug, Clone)]
pub struct NewSuperadmin {
    pub username: String,
    pub password: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Service for the people-and-departments side of the system.
pub struct DirectoryService {
    users: Arc<dyn UserRepository>,
    departments: Arc<dyn DepartmentRepository>,
    professors: Arc<dyn ProfessorRepository>,
}

impl DirectoryService {
    /// Create a new directory service over the given repositories.
    pub fn new(
        users: Arc<dyn UserRepository>,
        departments: Arc<dyn DepartmentRepository>,
        professors: Arc<dyn ProfessorRepository>,
    ) -> Self {
        Self {
            users,
            departments,
            professors,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Departments
    // ─────────────────────────────────────────────────────────────────────

    /// List all departments.
    pub async fn list_departments(&self) -> Result<Vec<Department>, CoreError> {
        self.departments.list().await.map_err(CoreError::from)
    }

    /// Get a department by code.
    pub async fn get_department(&self, code: &str) -> Result<Department, CoreError> {
        self.departments
            .get_by_code(code)
            .await
            .map_err(CoreError::from)
    }

    /// Create a department. Superadmins only.
    pub async fn create_department(
        &self,
        actor: &Actor,
        department: NewDepartment,
    ) -> Result<Department, CoreError> {
        if !actor.is_superadmin() {
            return Err(CoreError::forbidden());
        }
        self.departments
            .insert(&department)
            .await
            .map_err(CoreError::from)
    }

    /// The professor roster of one department, as the public view.
    pub async fn department_professors(
        &self,
        code: &str,
    ) -> Result<Vec<ProfessorInfo>, CoreError> {
        let department = self.departments.get_by_code(code).await?;
        let info = DepartmentInfo::from(&department);
        let professors = self.professors.list_by_department(department.id).await?;
        Ok(professors
            .into_iter()
            .map(|p| ProfessorInfo {
                full_name: p.full_name.clone(),
                department: Some(info.clone()),
                experience_level: p.experience_level(),
                has_phd: p.has_phd,
            })
            .collect())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Account creation
    // ─────────────────────────────────────────────────────────────────────

    /// Create a department head account and assign it to its department.
    /// Superadmins only.
    pub async fn create_department_head(
        &self,
        actor: &Actor,
        req: NewDepartmentHead,
    ) -> Result<UserProfile, CoreError> {
        if !actor.is_superadmin() {
            return Err(CoreError::forbidden());
        }

        // Resolve the department first so a bad code costs nothing.
        let mut department = self.department_for_input(&req.department_code).await?;
        let password_hash = hash_password(&req.password)?;
        let user = self
            .users
            .insert(&NewUser {
                username: req.username,
                password_hash,
                email: req.email,
                first_name: req.first_name,
                last_name: req.last_name,
                role: Role::DepartmentHead,
            })
            .await?;

        if let Some(previous) = department.head_user_id {
            tracing::warn!(
                department_code = %department.code,
                previous_head_id = previous,
                new_head_id = user.id,
                "Replacing existing department head"
            );
        }
        department.head_user_id = Some(user.id);
        self.departments.update(&department).await?;

        Ok(UserProfile {
            department_info: Some(DepartmentInfo::from(&department)),
            professor_info: None,
            is_superuser: false,
            id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            role: user.role,
        })
    }

    /// Create a professor account plus profile.
    ///
    /// Superadmins may target any department; department heads only their
    /// own. Professors may not create accounts at all.
    pub async fn create_professor(
        &self,
        actor: &Actor,
        req: NewProfessorAccount,
    ) -> Result<UserProfile, CoreError> {
        if actor.role == Role::Professor {
            return Err(CoreError::forbidden());
        }
        if !actor.is_superadmin() && actor.headed_department.is_none() {
            return Err(CoreError::Forbidden(
                "Department head is not assigned to any department".to_string(),
            ));
        }

        let department = self.department_for_input(&req.department_code).await?;
        if !actor.is_superadmin() && !actor.manages_department(department.id) {
            return Err(CoreError::Forbidden(
                "You can only create professors for your own department".to_string(),
            ));
        }

        let password_hash = hash_password(&req.password)?;
        let user = self
            .users
            .insert(&NewUser {
                username: req.username,
                password_hash,
                email: req.email,
                first_name: req.first_name,
                last_name: req.last_name,
                role: Role::Professor,
            })
            .await?;

        let professor = self
            .professors
            .insert(&NewProfessor {
                user_id: user.id,
                department_id: Some(department.id),
                full_name: user.full_name(),
                email: user.email.clone(),
                phone_number: req.phone_number,
                years_of_experience: req.years_of_experience,
                has_phd: req.has_phd,
            })
            .await?;

        let experience_level = professor.experience_level();
        Ok(UserProfile {
            department_info: None,
            professor_info: Some(ProfessorInfo {
                full_name: professor.full_name,
                department: Some(DepartmentInfo::from(&department)),
                experience_level,
                has_phd: professor.has_phd,
            }),
            is_superuser: false,
            id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            role: user.role,
        })
    }

    /// Create a superadmin account.
    ///
    /// Takes no [`Actor`]: this is a local bootstrap operation for operators
    /// with shell access, and the HTTP adapter never exposes it.
    pub async fn create_superadmin(&self, req: NewSuperadmin) -> Result<UserProfile, CoreError> {
        let password_hash = hash_password(&req.password)?;
        let user = self
            .users
            .insert(&NewUser {
                username: req.username,
                password_hash,
                email: req.email,
                first_name: req.first_name,
                last_name: req.last_name,
                role: Role::Superadmin,
            })
            .await?;

        Ok(UserProfile {
            id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            role: user.role,
            is_superuser: true,
            department_info: None,
            professor_info: None,
        })
    }

    // ─────────────────────────────────────────────────────────────────────
    // Profile assembly
    // ─────────────────────────────────────────────────────────────────────

    /// Assemble the composite profile for an authenticated account.
    pub async fn profile(&self, user: &UserAccount) -> Result<UserProfile, CoreError> {
        let department_info = if user.role == Role::DepartmentHead {
            self.headed_department(user.id)
                .await?
                .map(|d| DepartmentInfo::from(&d))
        } else {
            None
        };

        let professor_info = if user.role == Role::Professor {
            match self.professor_of(user.id).await? {
                Some(professor) => Some(self.professor_view(professor).await?),
                None => None,
            }
        } else {
            None
        };

        Ok(UserProfile {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            role: user.role,
            is_superuser: user.role == Role::Superadmin,
            department_info,
            professor_info,
        })
    }

    /// Build the permission-bearing caller identity for an account.
    pub async fn actor_for(&self, user: &UserAccount) -> Result<Actor, CoreError> {
        let headed_department = if user.role == Role::DepartmentHead {
            self.headed_department(user.id).await?.map(|d| d.id)
        } else {
            None
        };
        Ok(Actor {
            user_id: user.id,
            username: user.username.clone(),
            role: user.role,
            headed_department,
        })
    }

    // ─────────────────────────────────────────────────────────────────────
    // Lookups
    // ─────────────────────────────────────────────────────────────────────

    /// Department referenced by a request body; a bad code is the caller's
    /// mistake, not a missing resource.
    async fn department_for_input(&self, code: &str) -> Result<Department, CoreError> {
        match self.departments.get_by_code(code).await {
            Ok(d) => Ok(d),
            Err(RepositoryError::NotFound(_)) => {
                Err(CoreError::Validation("Invalid department code".to_string()))
            }
            Err(e) => Err(CoreError::from(e)),
        }
    }

    async fn headed_department(&self, user_id: i64) -> Result<Option<Department>, CoreError> {
        match self.departments.get_headed_by(user_id).await {
            Ok(d) => Ok(Some(d)),
            Err(RepositoryError::NotFound(_)) => Ok(None),
            Err(e) => Err(CoreError::from(e)),
        }
    }

    async fn professor_of(&self, user_id: i64) -> Result<Option<Professor>, CoreError> {
        match self.professors.get_by_user_id(user_id).await {
            Ok(p) => Ok(Some(p)),
            Err(RepositoryError::NotFound(_)) => Ok(None),
            Err(e) => Err(CoreError::from(e)),
        }
    }

    async fn professor_view(&self, professor: Professor) -> Result<ProfessorInfo, CoreError> {
        let department = match professor.department_id {
            Some(id) => match self.departments.get_by_id(id).await {
                Ok(d) => Some(DepartmentInfo::from(&d)),
                Err(RepositoryError::NotFound(_)) => None,
                Err(e) => return Err(CoreError::from(e)),
            },
            None => None,
        };
        let experience_level = professor.experience_level();
        Ok(ProfessorInfo {
            full_name: professor.full_name,
            department,
            experience_level,
            has_phd: professor.has_phd,
        })
    }
}
