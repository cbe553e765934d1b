use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{email::Email, user::User, user_id::UserId};

// UserRepository port trait and errors
#[derive(Debug, Error)]
pub enum UserRepositoryError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserRepositoryError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::Unavailable(_), Self::Unavailable(_))
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Persistence contract for users.
///
/// Lookups report a missing user as `Ok(None)`; `Err` is reserved for
/// failures of the storage itself.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts the user or replaces the one stored under the same id.
    async fn save(&self, user: User) -> Result<User, UserRepositoryError>;
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError>;
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserRepositoryError>;
    async fn find_all(&self) -> Result<Vec<User>, UserRepositoryError>;
    /// Removing an unknown id is not an error.
    async fn delete(&self, id: &UserId) -> Result<(), UserRepositoryError>;
    async fn exists(&self, id: &UserId) -> Result<bool, UserRepositoryError>;
}
