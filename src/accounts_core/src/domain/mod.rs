pub mod email;
pub mod user;
pub mod user_id;
pub mod user_name;
pub mod validation_error;
pub mod value_object;
