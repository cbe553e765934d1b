use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{
    validation_error::ValidationError,
    value_object::{ValueObject, trim_input},
};

const MIN_LENGTH: usize = 2;
const MAX_LENGTH: usize = 50;

static VALID_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s'-]+$").expect("valid name regex"));

/// Display name of a user: letters, spaces, apostrophes and hyphens.
///
/// Stored trimmed, with the original casing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if !Self::is_valid(raw) {
            return Err(ValidationError::InvalidUserName(raw.to_owned()));
        }
        Ok(Self(trim_input(raw).to_owned()))
    }

    pub fn is_valid(raw: &str) -> bool {
        let trimmed = trim_input(raw);
        let length = trimmed.chars().count();
        (MIN_LENGTH..=MAX_LENGTH).contains(&length) && VALID_NAME_REGEX.is_match(trimmed)
    }

    pub fn first_name(&self) -> &str {
        self.tokens().next().unwrap_or_default()
    }

    /// Last space-separated token, or `""` for a single-token name.
    pub fn last_name(&self) -> &str {
        let mut tokens = self.tokens();
        tokens.next();
        tokens.last().unwrap_or_default()
    }

    /// Upper-cased first letter of every token, e.g. `"mary jane"` -> `"MJ"`.
    pub fn initials(&self) -> String {
        self.tokens()
            .filter_map(|token| token.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn tokens(&self) -> std::str::Split<'_, char> {
        self.0.split(' ')
    }
}

impl ValueObject for UserName {
    type Value = str;

    fn value(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl FromStr for UserName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<UserName> for String {
    fn from(name: UserName) -> Self {
        name.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
