//! Redis session store - sessions shared across instances, evicted by TTL.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};
use uuid::Uuid;

use quill_core::domain::Session;
use quill_core::ports::{SessionError, SessionStore};

/// Redis connection configuration.
#[derive(Debug, Clone)]
pub struct RedisSessionConfig {
    /// Redis URL (e.g., redis://localhost:6379)
    pub url: String,
    /// Connection timeout
    pub connect_timeout: Duration,
}

impl Default for RedisSessionConfig {
    fn default() -> Self {
        Self {
            url: "redis://localhost:6379".to_string(),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

impl RedisSessionConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            url: std::env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
            connect_timeout: Duration::from_secs(
                std::env::var("REDIS_CONNECT_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5),
            ),
        }
    }
}

/// Redis-backed session store.
///
/// Each session lives as a JSON value under `session:{id}` with a TTL
/// matching its expiry, so Redis reclaims abandoned sessions on its own.
pub struct RedisSessionStore {
    conn: ConnectionManager,
}

impl RedisSessionStore {
    pub async fn new(config: RedisSessionConfig) -> Result<Self, SessionError> {
        let client = Client::open(config.url.as_str())
            .map_err(|e| SessionError::Backend(e.to_string()))?;

        // Use timeout to prevent hanging if Redis is unreachable
        let conn_manager_fut = ConnectionManager::new(client);
        let conn = tokio::time::timeout(config.connect_timeout, conn_manager_fut)
            .await
            .map_err(|_| SessionError::Backend("connection timed out".to_string()))?
            .map_err(|e| SessionError::Backend(e.to_string()))?;

        tracing::info!(url = %config.url, "connected to Redis session store");

        Ok(Self { conn })
    }

    /// Create from environment configuration.
    pub async fn from_env() -> Result<Self, SessionError> {
        Self::new(RedisSessionConfig::from_env()).await
    }

    fn key(id: Uuid) -> String {
        format!("session:{id}")
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn insert(&self, session: Session) -> Result<(), SessionError> {
        let payload = serde_json::to_string(&session)
            .map_err(|e| SessionError::Serialization(e.to_string()))?;

        let ttl = (session.expires_at - chrono::Utc::now())
            .num_seconds()
            .max(1) as u64;

        let mut conn = self.conn.clone();
        conn.set_ex::<_, _, ()>(Self::key(session.id), payload, ttl)
            .await
            .map_err(|e| SessionError::Backend(e.to_string()))?;

        Ok(())
    }

    async fn load(&self, id: Uuid) -> Result<Option<Session>, SessionError> {
        let mut conn = self.conn.clone();
        let payload: Option<String> = conn
            .get(Self::key(id))
            .await
            .map_err(|e| SessionError::Backend(e.to_string()))?;

        let Some(payload) = payload else {
            return Ok(None);
        };

        let session: Session = serde_json::from_str(&payload)
            .map_err(|e| SessionError::Serialization(e.to_string()))?;

        // TTL normally evicts first; the wall-clock check covers skew.
        if session.is_expired() {
            self.remove(id).await?;
            return Ok(None);
        }

        Ok(Some(session))
    }

    async fn remove(&self, id: Uuid) -> Result<(), SessionError> {
        let mut conn = self.conn.clone();
        conn.del::<_, ()>(Self::key(id))
            .await
            .map_err(|e| SessionError::Backend(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use quill_core::domain::{Role, SessionUser};

    async fn get_test_store() -> Option<RedisSessionStore> {
        let config = RedisSessionConfig {
            url: std::env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6389".to_string()),
            connect_timeout: Duration::from_secs(1),
        };

        RedisSessionStore::new(config).await.ok()
    }

    fn session() -> Session {
        Session::new(
            SessionUser {
                name: "jane".to_string(),
                email: "jane@example.com".to_string(),
                picture: None,
            },
            Role::User,
            TimeDelta::minutes(5),
        )
    }

    #[tokio::test]
    async fn test_redis_session_roundtrip() {
        let store = match get_test_store().await {
            Some(s) => s,
            None => {
                tracing::warn!("Redis not available, skipping test");
                return;
            }
        };

        let session = session();
        let id = session.id;

        store.insert(session).await.unwrap();
        let loaded = store.load(id).await.unwrap().unwrap();
        assert_eq!(loaded.user.email, "jane@example.com");

        store.remove(id).await.unwrap();
        assert!(store.load(id).await.unwrap().is_none());
    }
}
