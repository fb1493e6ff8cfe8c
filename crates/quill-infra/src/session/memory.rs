//! In-memory session store - used as fallback when Redis is unavailable.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::Session;
use quill_core::ports::{SessionError, SessionStore};

/// Sessions in a process-local map. Note: sessions are lost on restart
/// and not shared between instances.
#[derive(Default)]
pub struct InMemorySessionStore {
    store: RwLock<HashMap<Uuid, Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn insert(&self, session: Session) -> Result<(), SessionError> {
        let mut store = self.store.write().await;
        store.insert(session.id, session);
        Ok(())
    }

    async fn load(&self, id: Uuid) -> Result<Option<Session>, SessionError> {
        let store = self.store.read().await;
        let Some(session) = store.get(&id) else {
            return Ok(None);
        };

        if session.is_expired() {
            drop(store);
            // Evict under the write lock; the session is gone either way.
            self.store.write().await.remove(&id);
            return Ok(None);
        }

        Ok(Some(session.clone()))
    }

    async fn remove(&self, id: Uuid) -> Result<(), SessionError> {
        self.store.write().await.remove(&id);
        Ok(())
    }
}
