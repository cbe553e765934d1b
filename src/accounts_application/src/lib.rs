pub mod use_cases;

pub use use_cases::{
    change_email::{ChangeEmailError, ChangeEmailUseCase},
    register_user::{RegisterUserError, RegisterUserUseCase},
    rename_user::{RenameUserError, RenameUserUseCase},
};
