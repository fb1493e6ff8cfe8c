use async_trait::async_trait;

use crate::domain::{Post, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity: insert when it has no persisted id yet, update
    /// otherwise. Returns the persisted entity with the generated id and
    /// touched audit timestamps.
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. Deleting an absent id is a no-op.
    async fn delete_by_id(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i64> {
    /// All posts ordered by id descending (newest first).
    async fn find_all_desc(&self) -> Result<Vec<Post>, RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, i64> {
    /// Find a user by their email address (the login key).
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;
}
