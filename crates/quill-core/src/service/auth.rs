//! Login orchestration: provider profile -> persisted user.

use std::sync::Arc;

use crate::domain::{Role, User};
use crate::error::DomainError;
use crate::ports::{ProviderProfile, UserRepository};

/// Upserts users as they log in through the identity provider.
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Save-or-update the user behind a verified provider profile.
    ///
    /// Users are keyed by email: a known email gets its name and picture
    /// refreshed from the provider, an unknown one is inserted with the
    /// `User` role so a fresh login can use the API immediately.
    pub async fn login(&self, profile: ProviderProfile) -> Result<User, DomainError> {
        let user = match self.users.find_by_email(&profile.email).await? {
            Some(mut existing) => {
                existing.name = profile.name;
                existing.picture = profile.picture;
                existing
            }
            None => User::new(profile.name, profile.email, profile.picture, Role::User),
        };

        Ok(self.users.save(user).await?)
    }
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

    #[derive(Default)]
    struct FakeUserRepository {
        store: Mutex<BTreeMap<i64, User>>,
        next_id: AtomicI64,
    }

    #[async_trait]
    impl BaseRepository<User, i64> for FakeUserRepository {
        async fn find_by_id(&self, id: i64) -> Result<Option<User>, RepoError> {
            Ok(self.store.lock().unwrap().get(&id).cloned())
        }

        async fn save(&self, mut entity: User) -> Result<User, RepoError> {
            let mut store = self.store.lock().unwrap();
            let now = Utc::now();
            if entity.id == 0 {
                entity.id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
                entity.created_date = now;
            }
            entity.modified_date = now;
            store.insert(entity.id, entity.clone());
            Ok(entity)
        }

        async fn delete_by_id(&self, id: i64) -> Result<(), RepoError> {
            self.store.lock().unwrap().remove(&id);
            Ok(())
        }
    }

    #[async_trait]
    impl UserRepository for FakeUserRepository {
        async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
            Ok(self
                .store
                .lock()
                .unwrap()
                .values()
                .find(|u| u.email == email)
                .cloned())
        }
    }

    fn profile(name: &str, email: &str) -> ProviderProfile {
        ProviderProfile {
            name: name.to_string(),
            email: email.to_string(),
            picture: Some("https://cdn.example.com/p.png".to_string()),
        }
    }

    #[tokio::test]
    async fn first_login_inserts_user_with_user_role() {
        let repo = Arc::new(FakeUserRepository::default());
        let service = AuthService::new(repo.clone());

        let user = service.login(profile("jane", "jane@example.com")).await.unwrap();

        assert!(user.id > 0);
        assert_eq!(user.role, Role::User);
        assert_eq!(user.email, "jane@example.com");
        assert_eq!(repo.store.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn repeated_login_updates_profile_instead_of_duplicating() {
        let repo = Arc::new(FakeUserRepository::default());
        let service = AuthService::new(repo.clone());

        let first = service.login(profile("jane", "jane@example.com")).await.unwrap();
        let second = service
            .login(profile("jane doe", "jane@example.com"))
            .await
            .unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.name, "jane doe");
        assert_eq!(repo.store.lock().unwrap().len(), 1);
    }
}
