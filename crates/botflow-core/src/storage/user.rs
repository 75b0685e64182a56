//! User storage over redb.

use crate::models::User;
use anyhow::Result;
use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use std::sync::Arc;

pub const USER_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("users");

pub struct UserStorage {
    db: Arc<Database>,
}

impl UserStorage {
    pub fn new(db: Arc<Database>) -> Result<Self> {
        let write_txn = db.begin_write()?;
        write_txn.open_table(USER_TABLE)?;
        write_txn.commit()?;

        Ok(Self { db })
    }

    pub fn put(&self, user: &User) -> Result<()> {
        let json_bytes = serde_json::to_vec(user)?;
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(USER_TABLE)?;
            table.insert(user.id.as_str(), json_bytes.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    pub fn get(&self, id: &str) -> Result<Option<User>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(USER_TABLE)?;

        match table.get(id)? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }
}
