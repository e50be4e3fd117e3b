//! User account repository trait definition.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewUser, UserAccount};

/// Repository for account persistence.
///
/// Password hashes go in and come out as opaque strings; hashing and
/// verification happen in the auth service, never here.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Get an account by its database ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the account doesn't exist.
    async fn get_by_id(&self, id: i64) -> Result<UserAccount, RepositoryError>;

    /// Get an account by its username.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if no such account exists.
    async fn get_by_username(&self, username: &str) -> Result<UserAccount, RepositoryError>;

    /// Insert a new account.
    ///
    /// Returns the persisted account with its assigned ID.
    /// Returns `Err(RepositoryError::AlreadyExists)` if the username is taken.
    async fn insert(&self, user: &NewUser) -> Result<UserAccount, RepositoryError>;
}
