pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    email::Email,
    user::{User, UserProps, UserView},
    user_id::UserId,
    user_name::UserName,
    validation_error::ValidationError,
    value_object::ValueObject,
};

pub use ports::{
    repositories::{UserRepository, UserRepositoryError},
    services::AntiSpamService,
};
