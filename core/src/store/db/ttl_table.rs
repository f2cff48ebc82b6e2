//! Secondary index of TTL deadlines.
//!
//! Entries are `TtlKey { deadline, id }`, so iteration order is deadline order and
//! a scan for due pastes can stop at the first deadline still in the future.

use crate::store::error::StoreError;
use crate::types::{PasteId, TtlKey};
use redb::{ReadTransaction, ReadableTable, TableDefinition, WriteTransaction};
use std::time::SystemTime;

pub struct TtlTable {
    definition: TableDefinition<'static, TtlKey, ()>,
}

impl TtlTable {
    pub const fn new(name: &'static str) -> Self {
        Self {
            definition: TableDefinition::new(name),
        }
    }

    /// Initializes the table in the database (creates if not exists).
    pub fn init(&self, txn: &WriteTransaction) -> Result<(), StoreError> {
        txn.open_table(self.definition)?;
        Ok(())
    }

    pub fn insert(&self, txn: &WriteTransaction, ttl_key: &TtlKey) -> Result<(), StoreError> {
        let mut table = txn.open_table(self.definition)?;
        table.insert(ttl_key, &())?;
        Ok(())
    }

    /// Ids whose deadline is `<= now`, in deadline order.
    pub fn due(&self, txn: &ReadTransaction, now: SystemTime) -> Result<Vec<PasteId>, StoreError> {
        let table = txn.open_table(self.definition)?;
        let mut due = Vec::new();

        for entry in table.iter()? {
            let (ttl_key_guard, _) = entry?;
            let ttl_key = ttl_key_guard.value();

            if ttl_key.deadline <= now {
                due.push(ttl_key.id);
            } else {
                break;
            }
        }

        Ok(due)
    }
}
