//! Typed typebot storage over redb.

use crate::models::Typebot;
use anyhow::Result;
use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use std::sync::Arc;

pub const TYPEBOT_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("typebots");

pub struct TypebotStorage {
    db: Arc<Database>,
}

impl TypebotStorage {
    pub fn new(db: Arc<Database>) -> Result<Self> {
        let write_txn = db.begin_write()?;
        write_txn.open_table(TYPEBOT_TABLE)?;
        write_txn.commit()?;

        Ok(Self { db })
    }

    pub fn put(&self, typebot: &Typebot) -> Result<()> {
        let json_bytes = serde_json::to_vec(typebot)?;
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(TYPEBOT_TABLE)?;
            table.insert(typebot.id.as_str(), json_bytes.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    pub fn get(&self, id: &str) -> Result<Option<Typebot>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(TYPEBOT_TABLE)?;

        match table.get(id)? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    /// Fetch by id set, or every document when no set is given. Unknown ids
    /// are skipped silently.
    pub fn list(&self, ids: Option<&[String]>) -> Result<Vec<Typebot>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(TYPEBOT_TABLE)?;

        let mut typebots = Vec::new();
        match ids {
            Some(ids) => {
                for id in ids {
                    if let Some(value) = table.get(id.as_str())? {
                        typebots.push(serde_json::from_slice(value.value())?);
                    }
                }
            }
            None => {
                for item in table.iter()? {
                    let (_, value) = item?;
                    typebots.push(serde_json::from_slice(value.value())?);
                }
            }
        }
        Ok(typebots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::tempdir;

    fn test_typebot(id: &str) -> Typebot {
        Typebot {
            id: id.to_string(),
            name: format!("Typebot {id}"),
            workspace_id: "ws-001".to_string(),
            folder_id: None,
            groups: vec![],
            variables: vec![],
            webhooks: vec![],
            collaborators: vec![],
            theme: Default::default(),
            settings: Default::default(),
            is_archived: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_put_and_get() {
        let temp_dir = tempdir().unwrap();
        let db = Arc::new(Database::create(temp_dir.path().join("test.db")).unwrap());
        let storage = TypebotStorage::new(db).unwrap();

        storage.put(&test_typebot("tb-001")).unwrap();

        let retrieved = storage.get("tb-001").unwrap();
        assert_eq!(retrieved.unwrap().name, "Typebot tb-001");
        assert!(storage.get("missing").unwrap().is_none());
    }

    #[test]
    fn test_list_by_id_set_skips_unknown_ids() {
        let temp_dir = tempdir().unwrap();
        let db = Arc::new(Database::create(temp_dir.path().join("test.db")).unwrap());
        let storage = TypebotStorage::new(db).unwrap();

        storage.put(&test_typebot("tb-001")).unwrap();
        storage.put(&test_typebot("tb-002")).unwrap();

        let ids = vec!["tb-002".to_string(), "nope".to_string()];
        let typebots = storage.list(Some(&ids)).unwrap();
        assert_eq!(typebots.len(), 1);
        assert_eq!(typebots[0].id, "tb-002");

        assert_eq!(storage.list(None).unwrap().len(), 2);
    }
}
