use accounts_core::{User, UserId, UserName, UserRepository, UserRepositoryError, ValidationError};

/// Error types specific to the rename user use case
#[derive(Debug, thiserror::Error)]
pub enum RenameUserError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("User not found: {0}")]
    UserNotFound(UserId),
    #[error("User repository error: {0}")]
    Repository(#[from] UserRepositoryError),
}

/// Rename user use case - replaces the display name of an existing user
pub struct RenameUserUseCase<R>
where
    R: UserRepository,
{
    user_repository: R,
}

impl<R> RenameUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repository: R) -> Self {
        Self { user_repository }
    }

    #[tracing::instrument(name = "RenameUserUseCase::execute", skip(self))]
    pub async fn execute(&self, user_id: &UserId, new_name: &str) -> Result<User, RenameUserError> {
        let new_name = UserName::parse(new_name)?;

        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| RenameUserError::UserNotFound(user_id.clone()))?;

        let updated = self.user_repository.save(user.update_name(new_name)).await?;
        Ok(updated)
    }
}
