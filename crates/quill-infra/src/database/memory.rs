//! In-memory repositories - used when no database is configured and by
//! the HTTP integration tests. Data is lost on process restart.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use quill_core::domain::{Post, User};
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, PostRepository, UserRepository};

/// In-memory post store keyed by id. Performs the same audit touch the
/// PostgreSQL adapter does, so callers observe identical timestamp
/// semantics.
#[derive(Default)]
pub struct InMemoryPostRepository {
    store: RwLock<BTreeMap<i64, Post>>,
    next_id: AtomicI64,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }
}

#[async_trait]
impl BaseRepository<Post, i64> for InMemoryPostRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn save(&self, mut entity: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        let now = Utc::now();

        if entity.is_persisted() {
            // created_date survives updates no matter what the caller sent.
            if let Some(existing) = store.get(&entity.id) {
                entity.created_date = existing.created_date;
            }
        } else {
            entity.id = self.allocate_id();
            entity.created_date = now;
        }
        entity.modified_date = now;

        store.insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), RepoError> {
        self.store.write().await.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_all_desc(&self) -> Result<Vec<Post>, RepoError> {
        // BTreeMap iterates ascending by id; reverse for newest-first.
        Ok(self.store.read().await.values().rev().cloned().collect())
    }
}

/// In-memory user store keyed by id.
#[derive(Default)]
pub struct InMemoryUserRepository {
    store: RwLock<BTreeMap<i64, User>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<User, i64> for InMemoryUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, RepoError> {
        Ok(self.store.read().await.get(&id).cloned())
    }

    async fn save(&self, mut entity: User) -> Result<User, RepoError> {
        let mut store = self.store.write().await;
        let now = Utc::now();

        if entity.id == 0 {
            entity.id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
            entity.created_date = now;
        } else if let Some(existing) = store.get(&entity.id) {
            entity.created_date = existing.created_date;
        }
        entity.modified_date = now;

        store.insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), RepoError> {
        self.store.write().await.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        Ok(self
            .store
            .read()
            .await
            .values()
            .find(|u| u.email == email)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::domain::NewPost;

    fn sample(title: &str) -> Post {
        Post::new(NewPost {
            title: title.to_string(),
            content: "content".to_string(),
            author: "author".to_string(),
        })
    }

    #[tokio::test]
    async fn save_assigns_increasing_ids() {
        let repo = InMemoryPostRepository::new();

        let a = repo.save(sample("a")).await.unwrap();
        let b = repo.save(sample("b")).await.unwrap();

        assert!(a.id > 0);
        assert!(b.id > a.id);
    }

    #[tokio::test]
    async fn update_preserves_created_date() {
        let repo = InMemoryPostRepository::new();
        let saved = repo.save(sample("a")).await.unwrap();

        let mut changed = saved.clone();
        changed.title = "b".to_string();
        let updated = repo.save(changed).await.unwrap();

        assert_eq!(updated.id, saved.id);
        assert_eq!(updated.created_date, saved.created_date);
        assert!(updated.modified_date >= saved.modified_date);
    }

    #[tokio::test]
    async fn find_all_desc_orders_newest_first() {
        let repo = InMemoryPostRepository::new();
        let a = repo.save(sample("a")).await.unwrap();
        let b = repo.save(sample("b")).await.unwrap();

        let all = repo.find_all_desc().await.unwrap();
        let ids: Vec<i64> = all.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![b.id, a.id]);
    }

    #[tokio::test]
    async fn delete_of_absent_id_is_ok() {
        let repo = InMemoryPostRepository::new();
        assert!(repo.delete_by_id(404).await.is_ok());
    }
}
