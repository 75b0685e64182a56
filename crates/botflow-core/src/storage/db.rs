//! Central redb storage manager and its [`BotStore`] implementation.

use super::{
    BotStore, ResultStorage, SessionStorage, TypebotStorage, UserStorage, WorkspaceStorage,
};
use crate::models::{ChatResult, ResultFilter, Session, Typebot, User, Workspace};
use anyhow::Result;
use async_trait::async_trait;
use redb::Database;
use std::sync::Arc;

/// Storage manager that initializes all tables on one embedded database.
pub struct Storage {
    db: Arc<Database>,
    pub typebots: TypebotStorage,
    pub workspaces: WorkspaceStorage,
    pub results: ResultStorage,
    pub users: UserStorage,
    pub sessions: SessionStorage,
}

impl Storage {
    /// Create a storage instance at the given path, creating the database
    /// file and tables if needed.
    pub fn new(path: &str) -> Result<Self> {
        let db = Arc::new(Database::create(path)?);

        let typebots = TypebotStorage::new(db.clone())?;
        let workspaces = WorkspaceStorage::new(db.clone())?;
        let results = ResultStorage::new(db.clone())?;
        let users = UserStorage::new(db.clone())?;
        let sessions = SessionStorage::new(db.clone())?;

        Ok(Self {
            db,
            typebots,
            workspaces,
            results,
            users,
            sessions,
        })
    }

    /// Get a reference to the underlying database
    pub fn get_db(&self) -> Arc<Database> {
        self.db.clone()
    }
}

#[async_trait]
impl BotStore for Storage {
    async fn create_typebot(&self, typebot: &Typebot) -> Result<()> {
        self.typebots.put(typebot)
    }

    async fn get_typebot(&self, id: &str) -> Result<Option<Typebot>> {
        self.typebots.get(id)
    }

    async fn list_typebots(&self, ids: Option<&[String]>) -> Result<Vec<Typebot>> {
        self.typebots.list(ids)
    }

    async fn upsert_workspace(&self, workspace: &Workspace) -> Result<()> {
        self.workspaces.put(workspace)
    }

    async fn get_workspace(&self, id: &str) -> Result<Option<Workspace>> {
        self.workspaces.get(id)
    }

    async fn create_result(&self, result: &ChatResult) -> Result<()> {
        self.results.put(result)
    }

    async fn list_results(&self, typebot_id: &str) -> Result<Vec<ChatResult>> {
        self.results.list_for_typebot(typebot_id)
    }

    async fn delete_results(&self, filter: &ResultFilter) -> Result<u64> {
        self.results.delete_where(filter)
    }

    async fn upsert_user(&self, user: &User) -> Result<()> {
        self.users.put(user)
    }

    async fn get_user(&self, id: &str) -> Result<Option<User>> {
        self.users.get(id)
    }

    async fn create_session(&self, session: &Session) -> Result<()> {
        self.sessions.put(session)
    }

    async fn get_session(&self, token: &str) -> Result<Option<Session>> {
        self.sessions.get(token)
    }
}
