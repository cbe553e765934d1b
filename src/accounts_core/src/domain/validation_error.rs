use thiserror::Error;

/// Raised by every value-object constructor when its input breaks the invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid email format: {0}")]
    InvalidEmail(String),
    #[error("Invalid UserId format: {0}")]
    InvalidUserId(String),
    #[error("Invalid user name: {0}")]
    InvalidUserName(String),
}
