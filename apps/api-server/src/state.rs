//! Application state - shared across all handlers.

use std::sync::Arc;

use chrono::TimeDelta;

use quill_core::ports::{IdentityProvider, PostRepository, SessionStore, UserRepository};
use quill_core::service::{AuthService, PostService};
use quill_infra::database::{InMemoryPostRepository, InMemoryUserRepository};
use quill_infra::session::InMemorySessionStore;

#[cfg(feature = "postgres")]
use quill_infra::database::{self, PostgresPostRepository, PostgresUserRepository};

#[cfg(feature = "oauth")]
use quill_infra::auth::UserinfoClient;

#[cfg(feature = "redis")]
use quill_infra::session::{RedisSessionConfig, RedisSessionStore};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    pub auth: AuthService,
    pub sessions: Arc<dyn SessionStore>,
    pub identity: Arc<dyn IdentityProvider>,
    pub session_ttl: TimeDelta,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let (posts, users) = Self::repositories(config).await;
        let sessions = Self::session_store(config).await;
        let identity = Self::identity_provider();

        tracing::info!("application state initialized");

        Self {
            posts: PostService::new(posts),
            auth: AuthService::new(users),
            sessions,
            identity,
            session_ttl: config.session_ttl,
        }
    }

    async fn repositories(
        config: &AppConfig,
    ) -> (Arc<dyn PostRepository>, Arc<dyn UserRepository>) {
        #[cfg(feature = "postgres")]
        if let Some(db_config) = &config.database {
            match database::connect(db_config).await {
                Ok(conn) => {
                    return (
                        Arc::new(PostgresPostRepository::new(conn.clone())),
                        Arc::new(PostgresUserRepository::new(conn)),
                    );
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                }
            }
        }

        #[cfg(not(feature = "postgres"))]
        if config.database.is_some() {
            tracing::warn!("Built without postgres support - DATABASE_URL ignored");
        }

        tracing::warn!("Running with in-memory repositories - data is lost on restart");
        (
            Arc::new(InMemoryPostRepository::new()),
            Arc::new(InMemoryUserRepository::new()),
        )
    }

    async fn session_store(config: &AppConfig) -> Arc<dyn SessionStore> {
        #[cfg(feature = "redis")]
        if let Some(url) = &config.redis_url {
            let redis_config = RedisSessionConfig {
                url: url.clone(),
                ..Default::default()
            };
            match RedisSessionStore::new(redis_config).await {
                Ok(store) => return Arc::new(store),
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to Redis: {}. Using in-memory sessions.",
                        e
                    );
                }
            }
        }

        #[cfg(not(feature = "redis"))]
        if config.redis_url.is_some() {
            tracing::warn!("Built without redis support - REDIS_URL ignored");
        }

        Arc::new(InMemorySessionStore::new())
    }

    fn identity_provider() -> Arc<dyn IdentityProvider> {
        #[cfg(feature = "oauth")]
        {
            Arc::new(UserinfoClient::from_env())
        }

        #[cfg(not(feature = "oauth"))]
        {
            tracing::warn!("Built without oauth support - logins will be rejected");
            Arc::new(DisabledIdentityProvider)
        }
    }
}

/// Stand-in identity provider for builds without the oauth feature.
#[cfg(not(feature = "oauth"))]
pub struct DisabledIdentityProvider;

#[cfg(not(feature = "oauth"))]
#[async_trait::async_trait]
impl IdentityProvider for DisabledIdentityProvider {
    async fn fetch_profile(
        &self,
        _access_token: &str,
    ) -> Result<quill_core::ports::ProviderProfile, quill_core::ports::AuthError> {
        tracing::warn!("Identity provider not configured - rejecting login");
        Err(quill_core::ports::AuthError::Provider(
            "identity provider not configured".to_string(),
        ))
    }
}
