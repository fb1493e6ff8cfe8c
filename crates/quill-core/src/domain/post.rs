use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - one blog post.
///
/// `id == 0` marks an entity that has not been persisted yet; the store
/// assigns the real id on first save. `created_date` and `modified_date`
/// are owned by the persistence adapter, which touches them on every
/// insert/update - callers never set them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    /// Set at creation, never changed by an update.
    pub author: String,
    pub created_date: DateTime<Utc>,
    pub modified_date: DateTime<Utc>,
}

impl Post {
    /// Build a not-yet-persisted post from its creation fields.
    pub fn new(fields: NewPost) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            title: fields.title,
            content: fields.content,
            author: fields.author,
            created_date: now,
            modified_date: now,
        }
    }

    /// Whether the store has assigned an id yet.
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }

    /// Apply an update to the mutable fields. Author and id are untouched.
    pub fn apply(&mut self, update: PostUpdate) {
        self.title = update.title;
        self.content = update.content;
    }
}

/// Fields required to create a post.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: String,
}

/// Fields a caller may change on an existing post.
#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub title: String,
    pub content: String,
}
