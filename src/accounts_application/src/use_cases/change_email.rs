use accounts_core::{
    AntiSpamService, Email, User, UserId, UserRepository, UserRepositoryError, ValidationError,
};

/// Error types specific to the change email use case
#[derive(Debug, thiserror::Error)]
pub enum ChangeEmailError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("Email is blocked: {0}")]
    EmailBlocked(Email),
    #[error("User not found: {0}")]
    UserNotFound(UserId),
    #[error("User repository error: {0}")]
    Repository(#[from] UserRepositoryError),
}

/// Change email use case - replaces the email of an existing user
pub struct ChangeEmailUseCase<R, A>
where
    R: UserRepository,
    A: AntiSpamService,
{
    user_repository: R,
    anti_spam: A,
}

impl<R, A> ChangeEmailUseCase<R, A>
where
    R: UserRepository,
    A: AntiSpamService,
{
    pub fn new(user_repository: R, anti_spam: A) -> Self {
        Self {
            user_repository,
            anti_spam,
        }
    }

    /// Execute the change email use case
    ///
    /// The new address goes through the same anti-spam check as a
    /// registration. Returns the updated user as stored.
    #[tracing::instrument(name = "ChangeEmailUseCase::execute", skip(self))]
    pub async fn execute(&self, user_id: &UserId, new_email: &str) -> Result<User, ChangeEmailError> {
        let new_email = Email::parse(new_email)?;

        if self.anti_spam.is_blocked(new_email.as_str()).await {
            tracing::warn!(domain = new_email.domain(), "Email change rejected by anti-spam check");
            return Err(ChangeEmailError::EmailBlocked(new_email));
        }

        let user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ChangeEmailError::UserNotFound(user_id.clone()))?;

        let updated = self.user_repository.save(user.update_email(new_email)).await?;
        Ok(updated)
    }
}
