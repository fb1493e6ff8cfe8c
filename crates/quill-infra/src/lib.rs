//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//! This crate contains database, session-store, and identity-provider
//! integrations.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL persistence via SeaORM
//! - `oauth` - Userinfo-endpoint identity provider via reqwest
//! - `redis` - Redis-backed session store

pub mod database;
pub mod session;

#[cfg(feature = "oauth")]
pub mod auth;

// Re-exports - In-Memory
pub use database::{InMemoryPostRepository, InMemoryUserRepository};
pub use session::InMemorySessionStore;

#[cfg(feature = "postgres")]
pub use database::{PostgresPostRepository, PostgresUserRepository};

#[cfg(feature = "oauth")]
pub use auth::{UserinfoClient, UserinfoConfig};

#[cfg(feature = "redis")]
pub use session::{RedisSessionConfig, RedisSessionStore};
