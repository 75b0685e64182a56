//! Botflow core: models, flow-graph traversal, access rules, storage and the
//! procedure layer behind the HTTP server.

pub mod access;
pub mod error;
pub mod flow;
pub mod models;
pub mod paths;
pub mod services;
pub mod storage;

pub use error::{Error, Result};

use std::sync::Arc;
use storage::{BotStore, MemoryStore, Storage};

/// Core application state shared between the server and tests.
///
/// Procedures receive the persistence port through here instead of reaching
/// for a global database handle.
pub struct AppCore {
    pub store: Arc<dyn BotStore>,
}

impl AppCore {
    /// Redb-backed core at the given database path.
    pub fn new(db_path: &str) -> anyhow::Result<Self> {
        let store = Arc::new(Storage::new(db_path)?);
        Ok(Self { store })
    }

    /// Memory-backed core for tests and ephemeral runs.
    pub fn in_memory() -> Self {
        Self {
            store: Arc::new(MemoryStore::new()),
        }
    }

    pub fn with_store(store: Arc<dyn BotStore>) -> Self {
        Self { store }
    }
}
