//! Authentication service - credential hashing and verification.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::UserAccount;
use crate::ports::{CoreError, RepositoryError, UserRepository};

/// Errors from authentication.
///
/// Unknown username, wrong password, and deactivated accounts all collapse
/// into `InvalidCredentials`; callers never learn which one it was.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The username/password pair did not check out.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The password hasher itself failed.
    #[error("Password hashing failed: {0}")]
    Hash(String),

    /// The account store failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl From<AuthError> for CoreError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => Self::Validation(err.to_string()),
            AuthError::Hash(msg) => Self::Internal(msg),
            AuthError::Repository(e) => Self::Repository(e),
        }
    }
}

/// Hash a plaintext password for storage.
pub fn hash_password(plain: &str) -> Result<String, AuthError> {
    bcrypt::hash(plain, bcrypt::DEFAULT_COST).map_err(|e| AuthError::Hash(e.to_string()))
}

/// Check a plaintext password against a stored hash. Hasher failures count
/// as a mismatch.
#[must_use]
pub fn verify_password(plain: &str, hash: &str) -> bool {
    match bcrypt::verify(plain, hash) {
        Ok(matches) => matches,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to verify password against stored hash");
            false
        }
    }
}

/// Service for credential checks.
pub struct AuthService {
    users: Arc<dyn UserRepository>,
}

impl AuthService {
    /// Create a new auth service with the given account store.
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Verify a username/password pair and return the account.
    ///
    /// Fails with [`AuthError::InvalidCredentials`] for unknown usernames,
    /// wrong passwords, and inactive accounts alike.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<UserAccount, AuthError> {
        let user = match self.users.get_by_username(username).await {
            Ok(user) => user,
            Err(RepositoryError::NotFound(_)) => return Err(AuthError::InvalidCredentials),
            Err(e) => return Err(AuthError::Repository(e)),
        };

        if !user.is_active || !verify_password(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(user)
    }

    /// Hash a plaintext password for storage.
    pub fn hash_password(&self, plain: &str) -> Result<String, AuthError> {
        hash_password(plain)
    }
}
