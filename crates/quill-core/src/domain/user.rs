use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User entity - an identity that has logged in through the provider.
///
/// Users are keyed by email: logging in again with a known email updates
/// the profile fields instead of inserting a second row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub picture: Option<String>,
    pub role: Role,
    pub created_date: DateTime<Utc>,
    pub modified_date: DateTime<Utc>,
}

impl User {
    /// Build a not-yet-persisted user from a provider profile.
    pub fn new(name: String, email: String, picture: Option<String>, role: Role) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name,
            email,
            picture,
            role,
            created_date: now,
            modified_date: now,
        }
    }
}

/// Access level of a user. Ordering matters: `Guest < User`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Guest,
    User,
}

impl Role {
    /// Stable string form used by the database column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Guest => "GUEST",
            Role::User => "USER",
        }
    }

    /// Parse the database string form. Unknown values map to `Guest`
    /// so a bad row can never grant write access.
    pub fn from_db(value: &str) -> Self {
        match value {
            "USER" => Role::User,
            _ => Role::Guest,
        }
    }
}
