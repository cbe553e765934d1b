use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{
    validation_error::ValidationError,
    value_object::{ValueObject, trim_input},
};

const MAX_LENGTH: usize = 254;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// A trimmed, lower-cased email address.
///
/// The address is normalized before it is validated, so the stored form is
/// always the form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let candidate = normalize(raw);
        if !is_canonical_email(&candidate) {
            return Err(ValidationError::InvalidEmail(raw.to_owned()));
        }
        Ok(Self(candidate))
    }

    /// Predicate form of [`Email::parse`]. Never fails.
    pub fn is_valid(raw: &str) -> bool {
        is_canonical_email(&normalize(raw))
    }

    /// Everything after the first `@`.
    pub fn domain(&self) -> &str {
        self.split().1
    }

    /// Everything before the first `@`.
    pub fn local_part(&self) -> &str {
        self.split().0
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn split(&self) -> (&str, &str) {
        // A parsed email always contains exactly one '@'.
        self.0.split_once('@').unwrap_or((self.0.as_str(), ""))
    }
}

fn normalize(raw: &str) -> String {
    trim_input(raw).to_lowercase()
}

fn is_canonical_email(candidate: &str) -> bool {
    // Measured in UTF-16 code units, as address length limits usually are.
    let length = candidate.encode_utf16().count();
    length > 0
        && length <= MAX_LENGTH
        && !candidate.contains("..")
        && EMAIL_REGEX.is_match(candidate)
}

impl ValueObject for Email {
    type Value = str;

    fn value(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl FromStr for Email {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
