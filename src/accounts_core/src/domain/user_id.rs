use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{validation_error::ValidationError, value_object::ValueObject};

static UUID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[1-5][0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
        .expect("valid uuid regex")
});

/// Identifier of a [`User`](super::user::User), a version 1-5 UUID in its
/// hyphenated form.
///
/// A supplied id is stored verbatim, so equality follows the exact string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if !Self::is_valid(raw) {
            return Err(ValidationError::InvalidUserId(raw.to_owned()));
        }
        Ok(Self(raw.to_owned()))
    }

    /// Parses `raw` when present and non-empty, generates a fresh id otherwise.
    pub fn parse_or_generate(raw: Option<&str>) -> Result<Self, ValidationError> {
        match raw {
            Some(raw) if !raw.is_empty() => Self::parse(raw),
            _ => Ok(Self::generate()),
        }
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn is_valid(raw: &str) -> bool {
        UUID_REGEX.is_match(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for UserId {
    type Value = str;

    fn value(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl FromStr for UserId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
