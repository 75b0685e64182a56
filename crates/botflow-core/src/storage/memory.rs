//! In-memory [`BotStore`] implementation for tests and development.
//! Data is lost when the process exits.

use super::BotStore;
use crate::models::{ChatResult, ResultFilter, Session, Typebot, User, Workspace};
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory storage for a single entity type.
type Store<T> = Arc<RwLock<HashMap<String, T>>>;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    typebots: Store<Typebot>,
    workspaces: Store<Workspace>,
    results: Store<ChatResult>,
    users: Store<User>,
    sessions: Store<Session>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all stored data.
    pub async fn clear(&self) {
        self.typebots.write().await.clear();
        self.workspaces.write().await.clear();
        self.results.write().await.clear();
        self.users.write().await.clear();
        self.sessions.write().await.clear();
    }
}

#[async_trait]
impl BotStore for MemoryStore {
    async fn create_typebot(&self, typebot: &Typebot) -> Result<()> {
        self.typebots
            .write()
            .await
            .insert(typebot.id.clone(), typebot.clone());
        Ok(())
    }

    async fn get_typebot(&self, id: &str) -> Result<Option<Typebot>> {
        Ok(self.typebots.read().await.get(id).cloned())
    }

    async fn list_typebots(&self, ids: Option<&[String]>) -> Result<Vec<Typebot>> {
        let typebots = self.typebots.read().await;
        let listed = match ids {
            Some(ids) => ids.iter().filter_map(|id| typebots.get(id).cloned()).collect(),
            None => typebots.values().cloned().collect(),
        };
        Ok(listed)
    }

    async fn upsert_workspace(&self, workspace: &Workspace) -> Result<()> {
        self.workspaces
            .write()
            .await
            .insert(workspace.id.clone(), workspace.clone());
        Ok(())
    }

    async fn get_workspace(&self, id: &str) -> Result<Option<Workspace>> {
        Ok(self.workspaces.read().await.get(id).cloned())
    }

    async fn create_result(&self, result: &ChatResult) -> Result<()> {
        self.results
            .write()
            .await
            .insert(result.id.clone(), result.clone());
        Ok(())
    }

    async fn list_results(&self, typebot_id: &str) -> Result<Vec<ChatResult>> {
        Ok(self
            .results
            .read()
            .await
            .values()
            .filter(|r| r.typebot_id == typebot_id)
            .cloned()
            .collect())
    }

    async fn delete_results(&self, filter: &ResultFilter) -> Result<u64> {
        let mut results = self.results.write().await;
        let before = results.len();
        results.retain(|_, result| !filter.matches(result));
        Ok((before - results.len()) as u64)
    }

    async fn upsert_user(&self, user: &User) -> Result<()> {
        self.users.write().await.insert(user.id.clone(), user.clone());
        Ok(())
    }

    async fn get_user(&self, id: &str) -> Result<Option<User>> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn create_session(&self, session: &Session) -> Result<()> {
        self.sessions
            .write()
            .await
            .insert(session.token.clone(), session.clone());
        Ok(())
    }

    async fn get_session(&self, token: &str) -> Result<Option<Session>> {
        Ok(self.sessions.read().await.get(token).cloned())
    }
}
