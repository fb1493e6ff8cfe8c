//! Application configuration loaded from environment variables.

use std::env;

use chrono::TimeDelta;
use quill_infra::database::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Relational store; `None` runs the in-memory fallback.
    pub database: Option<DatabaseConfig>,
    /// Redis session backend; `None` keeps sessions in process memory.
    pub redis_url: Option<String>,
    /// How long a login session stays valid.
    pub session_ttl: TimeDelta,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let session_ttl_minutes = env::var("SESSION_TTL_MINUTES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(1440);

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database: DatabaseConfig::from_env(),
            redis_url: env::var("REDIS_URL").ok(),
            session_ttl: TimeDelta::minutes(session_ttl_minutes),
        }
    }
}
