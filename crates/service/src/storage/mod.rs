//! Storage capability over the four portfolio collections.
//!
//! One trait, two interchangeable backends: `MemStore` keeps records
//! in process memory for development and fallback, `DbStore` persists
//! them through SeaORM. The backend is picked once at startup from
//! config and never switched at runtime.

pub mod db;
pub mod mem;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use models::account::{self, NewAccount};
use models::message::{self, NewMessage};
use models::project::{self, NewProject, ProjectPatch};
use models::skill::{self, NewSkill, SkillPatch};

use crate::errors::StorageError;

pub use db::DbStore;
pub use mem::MemStore;

/// CRUD contract over the four independent entity collections.
///
/// Identifiers and creation timestamps are assigned here, never by
/// callers, and are immutable afterwards. Lookups on unknown ids
/// resolve to `Ok(None)` / `Ok(false)` rather than errors; updates
/// never upsert. Business-rule validation happens before these calls.
#[async_trait]
pub trait PortfolioStore: Send + Sync {
    // Accounts
    async fn account(&self, id: i32) -> Result<Option<account::Model>, StorageError>;
    async fn account_by_username(
        &self,
        username: &str,
    ) -> Result<Option<account::Model>, StorageError>;
    async fn create_account(&self, new: NewAccount) -> Result<account::Model, StorageError>;

    // Projects
    async fn projects(&self) -> Result<Vec<project::Model>, StorageError>;
    async fn project(&self, id: i32) -> Result<Option<project::Model>, StorageError>;
    async fn create_project(&self, new: NewProject) -> Result<project::Model, StorageError>;
    async fn update_project(
        &self,
        id: i32,
        patch: ProjectPatch,
    ) -> Result<Option<project::Model>, StorageError>;
    async fn delete_project(&self, id: i32) -> Result<bool, StorageError>;

    // Skills
    async fn skills(&self) -> Result<Vec<skill::Model>, StorageError>;
    async fn skill(&self, id: i32) -> Result<Option<skill::Model>, StorageError>;
    async fn create_skill(&self, new: NewSkill) -> Result<skill::Model, StorageError>;
    async fn update_skill(
        &self,
        id: i32,
        patch: SkillPatch,
    ) -> Result<Option<skill::Model>, StorageError>;
    async fn delete_skill(&self, id: i32) -> Result<bool, StorageError>;

    // Messages
    async fn messages(&self) -> Result<Vec<message::Model>, StorageError>;
    async fn message(&self, id: i32) -> Result<Option<message::Model>, StorageError>;
    async fn create_message(&self, new: NewMessage) -> Result<message::Model, StorageError>;
    /// Idempotent: marking an already-read message reports `true` again.
    async fn mark_message_read(&self, id: i32) -> Result<bool, StorageError>;
    async fn delete_message(&self, id: i32) -> Result<bool, StorageError>;
}

/// One-shot backend selection: a configured database URL picks the
/// relational backend, otherwise the in-memory store serves the
/// process lifetime.
pub async fn init_store(cfg: &configs::AppConfig) -> anyhow::Result<Arc<dyn PortfolioStore>> {
    if cfg.database.url.is_some() {
        let db = models::db::connect(&cfg.database).await?;
        info!(backend = "postgres", "storage backend selected");
        Ok(Arc::new(DbStore::new(db)))
    } else {
        info!(backend = "memory", "no database url configured; using in-memory store");
        Ok(Arc::new(MemStore::new()))
    }
}
