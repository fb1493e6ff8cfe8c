//! Session store port - abstraction over session backends (Redis, in-memory).

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Session;

/// Server-side storage for authenticated sessions.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Store a session under its id.
    async fn insert(&self, session: Session) -> Result<(), SessionError>;

    /// Load a session by id. Expired sessions are evicted and reported
    /// as absent.
    async fn load(&self, id: Uuid) -> Result<Option<Session>, SessionError>;

    /// Remove a session (logout). Removing an absent id is a no-op.
    async fn remove(&self, id: Uuid) -> Result<(), SessionError>;
}

/// Session store operation errors.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session backend failed: {0}")]
    Backend(String),

    #[error("session serialization failed: {0}")]
    Serialization(String),
}
