pub mod change_email;
pub mod register_user;
pub mod rename_user;

#[cfg(test)]
pub(crate) mod test_support;
