//! Post CRUD orchestration.

use std::sync::Arc;

use crate::domain::{NewPost, Post, PostUpdate};
use crate::error::DomainError;
use crate::ports::PostRepository;

/// Service for creating, updating, deleting and reading posts.
///
/// One repository call per operation; the store's transaction boundary
/// is the consistency mechanism.
#[derive(Clone)]
pub struct PostService {
    posts: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// Create a post and return its generated id.
    pub async fn create(&self, fields: NewPost) -> Result<i64, DomainError> {
        require_non_empty("title", &fields.title)?;
        require_non_empty("author", &fields.author)?;

        let saved = self.posts.save(Post::new(fields)).await?;
        Ok(saved.id)
    }

    /// Update title and content of an existing post; author stays as
    /// written at creation. Fails with `NotFound` when the id is unknown.
    ///
    /// The loaded entity is mutated and saved back so the persistence
    /// adapter's touch step bumps `modified_date`.
    pub async fn update(&self, id: i64, update: PostUpdate) -> Result<i64, DomainError> {
        require_non_empty("title", &update.title)?;

        let mut post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound { entity: "post", id })?;

        post.apply(update);
        self.posts.save(post).await?;
        Ok(id)
    }

    /// Delete a post. Deleting an unknown id succeeds silently.
    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        self.posts.delete_by_id(id).await?;
        Ok(())
    }

    /// All posts, newest first.
    pub async fn list(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.find_all_desc().await?)
    }

    /// A single post's detail, or `NotFound`.
    pub async fn get(&self, id: i64) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound { entity: "post", id })
    }
}

fn require_non_empty(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicI64, Ordering};

    use async_trait::async_trait;
    use chrono::Utc;

    use super::*;
    use crate::error::RepoError;
    use crate::ports::BaseRepository;

    /// Minimal in-process stand-in for the repository port.
    #[derive(Default)]
    struct FakePostRepository {
        store: Mutex<BTreeMap<i64, Post>>,
        next_id: AtomicI64,
    }

    #[async_trait]
    impl BaseRepository<Post, i64> for FakePostRepository {
        async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
            Ok(self.store.lock().unwrap().get(&id).cloned())
        }

        async fn save(&self, mut entity: Post) -> Result<Post, RepoError> {
            let mut store = self.store.lock().unwrap();
            let now = Utc::now();
            if entity.is_persisted() {
                if let Some(existing) = store.get(&entity.id) {
                    entity.created_date = existing.created_date;
                }
                entity.modified_date = now;
            } else {
                entity.id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
                entity.created_date = now;
                entity.modified_date = now;
            }
            store.insert(entity.id, entity.clone());
            Ok(entity)
        }

        async fn delete_by_id(&self, id: i64) -> Result<(), RepoError> {
            self.store.lock().unwrap().remove(&id);
            Ok(())
        }
    }

    #[async_trait]
    impl PostRepository for FakePostRepository {
        async fn find_all_desc(&self) -> Result<Vec<Post>, RepoError> {
            Ok(self.store.lock().unwrap().values().rev().cloned().collect())
        }
    }

    fn service() -> PostService {
        PostService::new(Arc::new(FakePostRepository::default()))
    }

    fn new_post(title: &str) -> NewPost {
        NewPost {
            title: title.to_string(),
            content: "content".to_string(),
            author: "author".to_string(),
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_persists_fields() {
        let service = service();

        let id = service.create(new_post("title")).await.unwrap();
        assert!(id > 0);

        let post = service.get(id).await.unwrap();
        assert_eq!(post.title, "title");
        assert_eq!(post.content, "content");
        assert_eq!(post.author, "author");
    }

    #[tokio::test]
    async fn create_rejects_blank_title() {
        let service = service();

        let result = service.create(new_post("   ")).await;
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[tokio::test]
    async fn list_returns_newest_first() {
        let service = service();

        let first = service.create(new_post("first")).await.unwrap();
        let second = service.create(new_post("second")).await.unwrap();
        let third = service.create(new_post("third")).await.unwrap();

        let posts = service.list().await.unwrap();
        let ids: Vec<i64> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![third, second, first]);
        assert_eq!(posts[0].title, "third");
    }

    #[tokio::test]
    async fn update_changes_title_and_content_only() {
        let service = service();
        let id = service.create(new_post("title")).await.unwrap();
        let before = service.get(id).await.unwrap();

        let returned = service
            .update(
                id,
                PostUpdate {
                    title: "title2".to_string(),
                    content: "content2".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(returned, id);

        let after = service.get(id).await.unwrap();
        assert_eq!(after.title, "title2");
        assert_eq!(after.content, "content2");
        assert_eq!(after.author, before.author);
        assert_eq!(after.id, before.id);
        assert_eq!(after.created_date, before.created_date);
        assert!(after.modified_date >= before.modified_date);
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_not_found() {
        let service = service();

        let result = service
            .update(
                9999,
                PostUpdate {
                    title: "title2".to_string(),
                    content: "content2".to_string(),
                },
            )
            .await;

        assert!(matches!(
            result,
            Err(DomainError::NotFound { entity: "post", id: 9999 })
        ));
    }

    #[tokio::test]
    async fn delete_removes_post_from_list_and_get() {
        let service = service();
        let id = service.create(new_post("title")).await.unwrap();

        service.delete(id).await.unwrap();

        assert!(matches!(
            service.get(id).await,
            Err(DomainError::NotFound { .. })
        ));
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_of_unknown_id_is_silent() {
        let service = service();

        assert!(service.delete(12345).await.is_ok());
    }
}
