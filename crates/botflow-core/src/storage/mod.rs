//! Persistence layer.
//!
//! All procedures talk to storage through the [`BotStore`] port so that the
//! server runs on the embedded redb database while tests substitute the
//! in-memory store.
//!
//! # Tables (redb)
//!
//! - `typebots` - Typebot documents
//! - `workspaces` - Workspaces with plan and membership
//! - `results` - Collected chat results
//! - `users` - User accounts
//! - `sessions` - Bearer tokens

pub mod db;
pub mod memory;
pub mod result;
pub mod session;
pub mod typebot;
pub mod user;
pub mod workspace;

pub use db::Storage;
pub use memory::MemoryStore;
pub use result::ResultStorage;
pub use session::SessionStorage;
pub use typebot::TypebotStorage;
pub use user::UserStorage;
pub use workspace::WorkspaceStorage;

use crate::models::{ChatResult, ResultFilter, Session, Typebot, User, Workspace};
use anyhow::Result;
use async_trait::async_trait;

/// Persistence port consumed by the service layer.
#[async_trait]
pub trait BotStore: Send + Sync {
    async fn create_typebot(&self, typebot: &Typebot) -> Result<()>;
    async fn get_typebot(&self, id: &str) -> Result<Option<Typebot>>;
    /// Fetch typebots by id set; `None` means every stored document.
    async fn list_typebots(&self, ids: Option<&[String]>) -> Result<Vec<Typebot>>;

    async fn upsert_workspace(&self, workspace: &Workspace) -> Result<()>;
    async fn get_workspace(&self, id: &str) -> Result<Option<Workspace>>;

    async fn create_result(&self, result: &ChatResult) -> Result<()>;
    async fn list_results(&self, typebot_id: &str) -> Result<Vec<ChatResult>>;
    /// Delete every result matching the filter, returning how many went away.
    async fn delete_results(&self, filter: &ResultFilter) -> Result<u64>;

    async fn upsert_user(&self, user: &User) -> Result<()>;
    async fn get_user(&self, id: &str) -> Result<Option<User>>;

    async fn create_session(&self, session: &Session) -> Result<()>;
    async fn get_session(&self, token: &str) -> Result<Option<Session>>;
}
