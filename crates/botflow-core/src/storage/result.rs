//! Chat result storage over redb.
//!
//! Rows are keyed by result id; scoping to a typebot is done by scanning,
//! which is fine at embedded-database scale.

use crate::models::{ChatResult, ResultFilter};
use anyhow::Result;
use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use std::sync::Arc;

pub const RESULT_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("results");

pub struct ResultStorage {
    db: Arc<Database>,
}

impl ResultStorage {
    pub fn new(db: Arc<Database>) -> Result<Self> {
        let write_txn = db.begin_write()?;
        write_txn.open_table(RESULT_TABLE)?;
        write_txn.commit()?;

        Ok(Self { db })
    }

    pub fn put(&self, result: &ChatResult) -> Result<()> {
        let json_bytes = serde_json::to_vec(result)?;
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(RESULT_TABLE)?;
            table.insert(result.id.as_str(), json_bytes.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    pub fn list_for_typebot(&self, typebot_id: &str) -> Result<Vec<ChatResult>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(RESULT_TABLE)?;

        let mut results = Vec::new();
        for item in table.iter()? {
            let (_, value) = item?;
            let result: ChatResult = serde_json::from_slice(value.value())?;
            if result.typebot_id == typebot_id {
                results.push(result);
            }
        }
        Ok(results)
    }

    /// Remove every row the filter matches inside one write transaction.
    pub fn delete_where(&self, filter: &ResultFilter) -> Result<u64> {
        let write_txn = self.db.begin_write()?;
        let deleted = {
            let mut table = write_txn.open_table(RESULT_TABLE)?;
            let mut doomed = Vec::new();
            for item in table.iter()? {
                let (key, value) = item?;
                let result: ChatResult = serde_json::from_slice(value.value())?;
                if filter.matches(&result) {
                    doomed.push(key.value().to_string());
                }
            }
            for id in &doomed {
                table.remove(id.as_str())?;
            }
            doomed.len() as u64
        };
        write_txn.commit()?;
        Ok(deleted)
    }
}
