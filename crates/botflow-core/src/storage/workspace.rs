//! Workspace storage over redb.

use crate::models::Workspace;
use anyhow::Result;
use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use std::sync::Arc;

pub const WORKSPACE_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("workspaces");

pub struct WorkspaceStorage {
    db: Arc<Database>,
}

impl WorkspaceStorage {
    pub fn new(db: Arc<Database>) -> Result<Self> {
        let write_txn = db.begin_write()?;
        write_txn.open_table(WORKSPACE_TABLE)?;
        write_txn.commit()?;

        Ok(Self { db })
    }

    pub fn put(&self, workspace: &Workspace) -> Result<()> {
        let json_bytes = serde_json::to_vec(workspace)?;
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(WORKSPACE_TABLE)?;
            table.insert(workspace.id.as_str(), json_bytes.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    pub fn get(&self, id: &str) -> Result<Option<Workspace>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(WORKSPACE_TABLE)?;

        match table.get(id)? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }
}
