//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, ConnectionTrait, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub author: String,
    pub created_date: DateTimeWithTimeZone,
    pub modified_date: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

/// Audit touch: the store owns both timestamps. `created_date` is stamped
/// once on insert, `modified_date` on every write.
#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let now = chrono::Utc::now();
        if insert {
            self.created_date = Set(now.into());
        }
        self.modified_date = Set(now.into());
        Ok(self)
    }
}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for quill_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            author: model.author,
            created_date: model.created_date.into(),
            modified_date: model.modified_date.into(),
        }
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel. A post without a
/// persisted id leaves the primary key unset so the insert generates one.
impl From<quill_core::domain::Post> for ActiveModel {
    fn from(post: quill_core::domain::Post) -> Self {
        Self {
            id: if post.is_persisted() { Set(post.id) } else { NotSet },
            title: Set(post.title),
            content: Set(post.content),
            author: Set(post.author),
            created_date: Set(post.created_date.into()),
            modified_date: Set(post.modified_date.into()),
        }
    }
}
