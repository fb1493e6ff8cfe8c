use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Role, User};

/// The slice of a user's profile kept in the session after login.
///
/// Copied once from the provider profile via the persisted [`User`];
/// never re-fetched while the session lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub name: String,
    pub email: String,
    pub picture: Option<String>,
}

impl From<&User> for SessionUser {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            picture: user.picture.clone(),
        }
    }
}

/// One authenticated browser session, addressed by the `session_id` cookie.
///
/// Lives only in the session store; expired sessions are evicted on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub user: SessionUser,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn new(user: SessionUser, role: Role, ttl: TimeDelta) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user,
            role,
            created_at: now,
            expires_at: now + ttl,
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new(
            "jane".to_string(),
            "jane@example.com".to_string(),
            Some("https://cdn.example.com/jane.png".to_string()),
            Role::User,
        )
    }

    #[test]
    fn session_user_copies_email_from_email() {
        let user = sample_user();
        let session_user = SessionUser::from(&user);

        assert_eq!(session_user.name, "jane");
        assert_eq!(session_user.email, "jane@example.com");
        assert_eq!(
            session_user.picture.as_deref(),
            Some("https://cdn.example.com/jane.png")
        );
    }

    #[test]
    fn fresh_session_is_not_expired() {
        let session = Session::new(
            SessionUser::from(&sample_user()),
            Role::User,
            TimeDelta::minutes(30),
        );

        assert!(!session.is_expired());
        assert!(session.expires_at > session.created_at);
    }

    #[test]
    fn session_with_negative_ttl_is_expired() {
        let session = Session::new(
            SessionUser::from(&sample_user()),
            Role::User,
            TimeDelta::minutes(-1),
        );

        assert!(session.is_expired());
    }
}
