//! User entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, ConnectionTrait, Set};

use quill_core::domain::Role;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub picture: Option<String>,
    pub role: String,
    pub created_date: DateTimeWithTimeZone,
    pub modified_date: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

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

/// Conversion from SeaORM Model to Domain User.
impl From<Model> for quill_core::domain::User {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            picture: model.picture,
            role: Role::from_db(&model.role),
            created_date: model.created_date.into(),
            modified_date: model.modified_date.into(),
        }
    }
}

/// Conversion from Domain User to SeaORM ActiveModel.
impl From<quill_core::domain::User> for ActiveModel {
    fn from(user: quill_core::domain::User) -> Self {
        Self {
            id: if user.id != 0 { Set(user.id) } else { NotSet },
            name: Set(user.name),
            email: Set(user.email),
            picture: Set(user.picture),
            role: Set(user.role.as_str().to_string()),
            created_date: Set(user.created_date.into()),
            modified_date: Set(user.modified_date.into()),
        }
    }
}
