//! `AppCore` - the primary application facade.
//!
//! This is the composition root for core services. Adapters (CLI, HTTP)
//! receive an `AppCore` instance and use it to access all functionality.

use std::sync::Arc;

use crate::ports::{Repos, WorkbookCodec};

use super::{AuthService, CurriculumService, DirectoryService};

/// The core application facade.
///
/// `AppCore` provides access to all core services. It's constructed at the
/// adapter's composition root (main.rs or bootstrap.rs) with concrete
/// repositories and a workbook codec.
///
/// # Example
///
/// ```ignore
/// let repos = provost_db::factory::build_repos(&pool);
/// let core = AppCore::new(repos, Arc::new(XlsxCodec::new()));
///
/// let curricula = core.curricula().list().await?;
/// ```
pub struct AppCore {
    auth: AuthService,
    directory: DirectoryService,
    curricula: CurriculumService,
}

impl AppCore {
    /// Create a new `AppCore` with the given repositories and codec.
    pub fn new(repos: Repos, codec: Arc<dyn WorkbookCodec>) -> Self {
        Self {
            auth: AuthService::new(Arc::clone(&repos.users)),
            directory: DirectoryService::new(repos.users, repos.departments, repos.professors),
            curricula: CurriculumService::new(repos.curricula, codec),
        }
    }

    /// Access the auth service.
    pub const fn auth(&self) -> &AuthService {
        &self.auth
    }

    /// Access the directory service.
    pub const fn directory(&self) -> &DirectoryService {
        &self.directory
    }

    /// Access the curriculum service.
    pub const fn curricula(&self) -> &CurriculumService {
        &self.curricula
    }
}
