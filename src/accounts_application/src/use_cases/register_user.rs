use accounts_core::{
    AntiSpamService, Email, User, UserName, UserRepository, UserRepositoryError, ValidationError,
};

/// Error types specific to the register user use case
#[derive(Debug, thiserror::Error)]
pub enum RegisterUserError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("Email is blocked: {0}")]
    EmailBlocked(Email),
    #[error("User repository error: {0}")]
    Repository(#[from] UserRepositoryError),
}

/// Register user use case - creates an account from raw user input
pub struct RegisterUserUseCase<R, A>
where
    R: UserRepository,
    A: AntiSpamService,
{
    user_repository: R,
    anti_spam: A,
}

impl<R, A> RegisterUserUseCase<R, A>
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

    /// Execute the register user use case
    ///
    /// # Arguments
    /// * `email` - Raw email address, normalized before any check
    /// * `name` - Raw display name
    ///
    /// # Returns
    /// The stored user, or an error if the input is invalid, the email is
    /// blocked, or the repository fails. Nothing is saved on error.
    #[tracing::instrument(name = "RegisterUserUseCase::execute", skip(self))]
    pub async fn execute(&self, email: &str, name: &str) -> Result<User, RegisterUserError> {
        let email = Email::parse(email)?;
        let name = UserName::parse(name)?;

        if self.anti_spam.is_blocked(email.as_str()).await {
            tracing::warn!(domain = email.domain(), "Registration rejected by anti-spam check");
            return Err(RegisterUserError::EmailBlocked(email));
        }

        let user = self
            .user_repository
            .save(User::create(email, name, None))
            .await?;

        tracing::info!(user_id = %user.id(), "User registered");
        Ok(user)
    }
}
