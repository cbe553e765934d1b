use std::hash::{Hash, Hasher};

use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};
use serde::{Serialize, Serializer};

use super::{email::Email, user_id::UserId, user_name::UserName, value_object::ValueObject};

/// The full attribute set of a [`User`], as stored by a persistence adapter.
#[derive(Debug, Clone)]
pub struct UserProps {
    pub id: UserId,
    pub email: Email,
    pub name: UserName,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A user account.
///
/// Two users are equal when their ids are equal, whatever their other
/// attributes. Updates never modify a user in place; they return a new one.
#[derive(Debug, Clone)]
pub struct User {
    props: UserProps,
}

impl User {
    pub fn create(email: Email, name: UserName, id: Option<UserId>) -> Self {
        let now = Utc::now();
        Self {
            props: UserProps {
                id: id.unwrap_or_else(UserId::generate),
                email,
                name,
                created_at: now,
                updated_at: now,
            },
        }
    }

    /// Rebuilds a user from stored attributes without re-deriving anything.
    pub fn reconstitute(props: UserProps) -> Self {
        Self { props }
    }

    pub fn id(&self) -> &UserId {
        &self.props.id
    }

    pub fn email(&self) -> &Email {
        &self.props.email
    }

    pub fn name(&self) -> &UserName {
        &self.props.name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.props.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.props.updated_at
    }

    pub fn props(&self) -> &UserProps {
        &self.props
    }

    pub fn update_email(&self, email: Email) -> Self {
        self.with(|props| props.email = email)
    }

    pub fn update_name(&self, name: UserName) -> Self {
        self.with(|props| props.name = name)
    }

    /// Primitive projection used by persistence and presentation code.
    pub fn to_view(&self) -> UserView {
        UserView {
            id: self.props.id.value().to_owned(),
            email: self.props.email.value().to_owned(),
            name: self.props.name.value().to_owned(),
            created_at: to_iso_8601(self.props.created_at),
            updated_at: to_iso_8601(self.props.updated_at),
        }
    }

    /// Copies the attributes, applies `change` and refreshes `updated_at`.
    fn with(&self, change: impl FnOnce(&mut UserProps)) -> Self {
        let mut props = self.props.clone();
        change(&mut props);
        props.updated_at = next_update_time(self.props.updated_at);
        Self { props }
    }
}

// Keeps `updated_at` strictly increasing even when the clock has not moved,
// except at the upper bound of `DateTime<Utc>`, where it stays put.
fn next_update_time(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        return now;
    }
    previous
        .checked_add_signed(TimeDelta::milliseconds(1))
        .unwrap_or(previous)
}

fn to_iso_8601(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.props.id == other.props.id
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.props.id.hash(state);
    }
}

/// Serialized form of a [`User`]: plain strings, ISO-8601 timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: String,
    pub email: String,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Serialize for User {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_view().serialize(serializer)
    }
}
