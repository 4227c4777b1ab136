use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set, SqlErr,
};
use serde_json::Value;

use models::account::{self, NewAccount};
use models::message::{self, NewMessage};
use models::project::{self, NewProject, ProjectPatch};
use models::skill::{self, NewSkill, SkillPatch};

use crate::errors::StorageError;
use crate::storage::PortfolioStore;

/// SeaORM-backed relational store. Ids come from the tables'
/// auto-increment sequences and `created_at` from the column default,
/// so inserts leave both unset.
pub struct DbStore {
    db: DatabaseConnection,
}

impl DbStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn db_err(e: DbErr) -> StorageError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => StorageError::Conflict(msg),
        _ => StorageError::Db(e.to_string()),
    }
}

#[async_trait]
impl PortfolioStore for DbStore {
    async fn account(&self, id: i32) -> Result<Option<account::Model>, StorageError> {
        account::Entity::find_by_id(id).one(&self.db).await.map_err(db_err)
    }

    async fn account_by_username(
        &self,
        username: &str,
    ) -> Result<Option<account::Model>, StorageError> {
        account::Entity::find()
            .filter(account::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(db_err)
    }

    async fn create_account(&self, new: NewAccount) -> Result<account::Model, StorageError> {
        let am = account::ActiveModel {
            username: Set(new.username),
            password: Set(new.password),
            name: Set(new.name),
            email: Set(new.email),
            bio: Set(new.bio),
            profile_image: Set(new.profile_image),
            ..Default::default()
        };
        am.insert(&self.db).await.map_err(db_err)
    }

    async fn projects(&self) -> Result<Vec<project::Model>, StorageError> {
        project::Entity::find().all(&self.db).await.map_err(db_err)
    }

    async fn project(&self, id: i32) -> Result<Option<project::Model>, StorageError> {
        project::Entity::find_by_id(id).one(&self.db).await.map_err(db_err)
    }

    async fn create_project(&self, new: NewProject) -> Result<project::Model, StorageError> {
        let am = project::ActiveModel {
            title: Set(new.title),
            description: Set(new.description),
            image: Set(new.image),
            tags: Set(Value::from(new.tags)),
            link: Set(new.link),
            ..Default::default()
        };
        am.insert(&self.db).await.map_err(db_err)
    }

    async fn update_project(
        &self,
        id: i32,
        patch: ProjectPatch,
    ) -> Result<Option<project::Model>, StorageError> {
        let Some(existing) = self.project(id).await? else {
            return Ok(None);
        };
        if patch.is_empty() {
            return Ok(Some(existing));
        }
        let mut am: project::ActiveModel = existing.into();
        if let Some(title) = patch.title {
            am.title = Set(title);
        }
        if let Some(description) = patch.description {
            am.description = Set(description);
        }
        if let Some(image) = patch.image {
            am.image = Set(Some(image));
        }
        if let Some(tags) = patch.tags {
            am.tags = Set(Value::from(tags));
        }
        if let Some(link) = patch.link {
            am.link = Set(Some(link));
        }
        am.update(&self.db).await.map(Some).map_err(db_err)
    }

    async fn delete_project(&self, id: i32) -> Result<bool, StorageError> {
        let res = project::Entity::delete_by_id(id).exec(&self.db).await.map_err(db_err)?;
        Ok(res.rows_affected > 0)
    }

    async fn skills(&self) -> Result<Vec<skill::Model>, StorageError> {
        skill::Entity::find().all(&self.db).await.map_err(db_err)
    }

    async fn skill(&self, id: i32) -> Result<Option<skill::Model>, StorageError> {
        skill::Entity::find_by_id(id).one(&self.db).await.map_err(db_err)
    }

    async fn create_skill(&self, new: NewSkill) -> Result<skill::Model, StorageError> {
        let am = skill::ActiveModel {
            name: Set(new.name),
            icon: Set(new.icon),
            proficiency: Set(new.proficiency),
            category: Set(new.category),
            ..Default::default()
        };
        am.insert(&self.db).await.map_err(db_err)
    }

    async fn update_skill(
        &self,
        id: i32,
        patch: SkillPatch,
    ) -> Result<Option<skill::Model>, StorageError> {
        let Some(existing) = self.skill(id).await? else {
            return Ok(None);
        };
        if patch.is_empty() {
            return Ok(Some(existing));
        }
        let mut am: skill::ActiveModel = existing.into();
        if let Some(name) = patch.name {
            am.name = Set(name);
        }
        if let Some(icon) = patch.icon {
            am.icon = Set(icon);
        }
        if let Some(proficiency) = patch.proficiency {
            am.proficiency = Set(proficiency);
        }
        if let Some(category) = patch.category {
            am.category = Set(Some(category));
        }
        am.update(&self.db).await.map(Some).map_err(db_err)
    }

    async fn delete_skill(&self, id: i32) -> Result<bool, StorageError> {
        let res = skill::Entity::delete_by_id(id).exec(&self.db).await.map_err(db_err)?;
        Ok(res.rows_affected > 0)
    }

    async fn messages(&self) -> Result<Vec<message::Model>, StorageError> {
        message::Entity::find().all(&self.db).await.map_err(db_err)
    }

    async fn message(&self, id: i32) -> Result<Option<message::Model>, StorageError> {
        message::Entity::find_by_id(id).one(&self.db).await.map_err(db_err)
    }

    async fn create_message(&self, new: NewMessage) -> Result<message::Model, StorageError> {
        let am = message::ActiveModel {
            name: Set(new.name),
            email: Set(new.email),
            subject: Set(new.subject),
            message: Set(new.message),
            read: Set(message::UNREAD),
            ..Default::default()
        };
        am.insert(&self.db).await.map_err(db_err)
    }

    async fn mark_message_read(&self, id: i32) -> Result<bool, StorageError> {
        let res = message::Entity::update_many()
            .col_expr(message::Column::Read, Expr::value(message::READ))
            .filter(message::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(res.rows_affected > 0)
    }

    async fn delete_message(&self, id: i32) -> Result<bool, StorageError> {
        let res = message::Entity::delete_by_id(id).exec(&self.db).await.map_err(db_err)?;
        Ok(res.rows_affected > 0)
    }
}
