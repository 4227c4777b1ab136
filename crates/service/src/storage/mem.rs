use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::prelude::DateTimeWithTimeZone;
use serde_json::Value;
use tokio::sync::RwLock;

use models::account::{self, NewAccount};
use models::message::{self, NewMessage};
use models::project::{self, NewProject, ProjectPatch};
use models::skill::{self, NewSkill, SkillPatch};

use crate::errors::StorageError;
use crate::storage::PortfolioStore;

/// In-memory backend. Records live for the process lifetime only.
/// Ids come from per-collection counters owned by the state struct;
/// they are strictly increasing and never reused, even after deletes.
///
/// Uniqueness of account usernames is not enforced here — that
/// constraint lives in the relational schema and this backend is the
/// development fallback.
pub struct MemStore {
    state: RwLock<State>,
}

struct State {
    accounts: HashMap<i32, account::Model>,
    projects: HashMap<i32, project::Model>,
    skills: HashMap<i32, skill::Model>,
    messages: HashMap<i32, message::Model>,
    next_account_id: i32,
    next_project_id: i32,
    next_skill_id: i32,
    next_message_id: i32,
}

impl MemStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(State {
                accounts: HashMap::new(),
                projects: HashMap::new(),
                skills: HashMap::new(),
                messages: HashMap::new(),
                next_account_id: 1,
                next_project_id: 1,
                next_skill_id: 1,
                next_message_id: 1,
            }),
        }
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

fn now() -> DateTimeWithTimeZone {
    Utc::now().fixed_offset()
}

#[async_trait]
impl PortfolioStore for MemStore {
    async fn account(&self, id: i32) -> Result<Option<account::Model>, StorageError> {
        Ok(self.state.read().await.accounts.get(&id).cloned())
    }

    async fn account_by_username(
        &self,
        username: &str,
    ) -> Result<Option<account::Model>, StorageError> {
        let state = self.state.read().await;
        Ok(state.accounts.values().find(|a| a.username == username).cloned())
    }

    async fn create_account(&self, new: NewAccount) -> Result<account::Model, StorageError> {
        let mut state = self.state.write().await;
        let id = state.next_account_id;
        state.next_account_id += 1;
        let record = account::Model {
            id,
            username: new.username,
            password: new.password,
            name: new.name,
            email: new.email,
            bio: new.bio,
            profile_image: new.profile_image,
            created_at: now(),
        };
        state.accounts.insert(id, record.clone());
        Ok(record)
    }

    async fn projects(&self) -> Result<Vec<project::Model>, StorageError> {
        Ok(self.state.read().await.projects.values().cloned().collect())
    }

    async fn project(&self, id: i32) -> Result<Option<project::Model>, StorageError> {
        Ok(self.state.read().await.projects.get(&id).cloned())
    }

    async fn create_project(&self, new: NewProject) -> Result<project::Model, StorageError> {
        let mut state = self.state.write().await;
        let id = state.next_project_id;
        state.next_project_id += 1;
        let record = project::Model {
            id,
            title: new.title,
            description: new.description,
            image: new.image,
            tags: Value::from(new.tags),
            link: new.link,
            created_at: now(),
        };
        state.projects.insert(id, record.clone());
        Ok(record)
    }

    async fn update_project(
        &self,
        id: i32,
        patch: ProjectPatch,
    ) -> Result<Option<project::Model>, StorageError> {
        let mut state = self.state.write().await;
        let Some(record) = state.projects.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(title) = patch.title {
            record.title = title;
        }
        if let Some(description) = patch.description {
            record.description = description;
        }
        if let Some(image) = patch.image {
            record.image = Some(image);
        }
        if let Some(tags) = patch.tags {
            record.tags = Value::from(tags);
        }
        if let Some(link) = patch.link {
            record.link = Some(link);
        }
        Ok(Some(record.clone()))
    }

    async fn delete_project(&self, id: i32) -> Result<bool, StorageError> {
        Ok(self.state.write().await.projects.remove(&id).is_some())
    }

    async fn skills(&self) -> Result<Vec<skill::Model>, StorageError> {
        Ok(self.state.read().await.skills.values().cloned().collect())
    }

    async fn skill(&self, id: i32) -> Result<Option<skill::Model>, StorageError> {
        Ok(self.state.read().await.skills.get(&id).cloned())
    }

    async fn create_skill(&self, new: NewSkill) -> Result<skill::Model, StorageError> {
        let mut state = self.state.write().await;
        let id = state.next_skill_id;
        state.next_skill_id += 1;
        let record = skill::Model {
            id,
            name: new.name,
            icon: new.icon,
            proficiency: new.proficiency,
            category: new.category,
            created_at: now(),
        };
        state.skills.insert(id, record.clone());
        Ok(record)
    }

    async fn update_skill(
        &self,
        id: i32,
        patch: SkillPatch,
    ) -> Result<Option<skill::Model>, StorageError> {
        let mut state = self.state.write().await;
        let Some(record) = state.skills.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(name) = patch.name {
            record.name = name;
        }
        if let Some(icon) = patch.icon {
            record.icon = icon;
        }
        if let Some(proficiency) = patch.proficiency {
            record.proficiency = proficiency;
        }
        if let Some(category) = patch.category {
            record.category = Some(category);
        }
        Ok(Some(record.clone()))
    }

    async fn delete_skill(&self, id: i32) -> Result<bool, StorageError> {
        Ok(self.state.write().await.skills.remove(&id).is_some())
    }

    async fn messages(&self) -> Result<Vec<message::Model>, StorageError> {
        Ok(self.state.read().await.messages.values().cloned().collect())
    }

    async fn message(&self, id: i32) -> Result<Option<message::Model>, StorageError> {
        Ok(self.state.read().await.messages.get(&id).cloned())
    }

    async fn create_message(&self, new: NewMessage) -> Result<message::Model, StorageError> {
        let mut state = self.state.write().await;
        let id = state.next_message_id;
        state.next_message_id += 1;
        let record = message::Model {
            id,
            name: new.name,
            email: new.email,
            subject: new.subject,
            message: new.message,
            read: message::UNREAD,
            created_at: now(),
        };
        state.messages.insert(id, record.clone());
        Ok(record)
    }

    async fn mark_message_read(&self, id: i32) -> Result<bool, StorageError> {
        let mut state = self.state.write().await;
        match state.messages.get_mut(&id) {
            Some(record) => {
                record.read = message::READ;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_message(&self, id: i32) -> Result<bool, StorageError> {
        Ok(self.state.write().await.messages.remove(&id).is_some())
    }
}
