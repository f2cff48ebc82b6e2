//! Durable paste storage on redb.
//!
//! Tables:
//! - `pastes`: PasteId → VersionedPaste
//! - `ttl_expiry`: TtlKey → () for every paste created with a TTL
//!
//! redb admits one write transaction at a time and later writers wait for the
//! current one to commit. A mutation that reads and rewrites a record inside a
//! single write transaction is therefore atomic with respect to every other writer.

use crate::store::PasteStore;
use crate::store::error::StoreError;
use crate::types::paste::versioned_value::VersionedPaste;
use crate::types::paste::versioned_value::latest_value::PasteRecord;
use crate::types::{Config, Paste, PasteId, TtlKey};
use redb::{ReadableDatabase, ReadableTable, TableDefinition};
use std::cmp::Reverse;
use std::time::SystemTime;
use ttl_table::TtlTable;

mod ttl_table;

/// Main table: PasteId → VersionedPaste
const PASTES_TABLE: TableDefinition<PasteId, VersionedPaste> = TableDefinition::new("pastes");

/// Deadlines of pastes created with a TTL.
const TTL_EXPIRY: TtlTable = TtlTable::new("ttl_expiry");

pub struct PasteDb {
    db: redb::Database,
}

impl PasteDb {
    /// Creates or opens the database file named by the config.
    pub fn open(config: &Config) -> Result<Self, StoreError> {
        std::fs::create_dir_all(&config.base_path)?;

        let db = redb::Database::create(config.db_path())?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(PASTES_TABLE)?;
            TTL_EXPIRY.init(&write_txn)?;
        }
        write_txn.commit()?;

        Ok(Self { db })
    }

    fn extract_latest(versioned: VersionedPaste) -> PasteRecord {
        versioned.into_latest()
    }
}

impl PasteStore for PasteDb {
    fn create(&self, paste: Paste) -> Result<Paste, StoreError> {
        let write_txn = self.db.begin_write()?;

        {
            let mut pastes = write_txn.open_table(PASTES_TABLE)?;

            if pastes.get(&paste.id)?.is_some() {
                return Err(StoreError::Conflict);
            }

            pastes.insert(&paste.id, &VersionedPaste::V1(paste.to_record()))?;

            if let Some(deadline) = paste.expires_at {
                let ttl_key = TtlKey {
                    deadline,
                    id: paste.id.clone(),
                };
                TTL_EXPIRY.insert(&write_txn, &ttl_key)?;
            }
        }

        write_txn.commit()?;
        Ok(paste)
    }

    fn get(&self, id: &PasteId) -> Result<Paste, StoreError> {
        let read_txn = self.db.begin_read()?;
        let pastes = read_txn.open_table(PASTES_TABLE)?;

        let record = pastes
            .get(id)?
            .map(|g| Self::extract_latest(g.value()))
            .ok_or(StoreError::NotFound)?;

        Ok(Paste::from_record(id.clone(), record))
    }

    fn increment_view(&self, id: &PasteId) -> Result<u64, StoreError> {
        let write_txn = self.db.begin_write()?;
        let view_count;

        {
            let mut pastes = write_txn.open_table(PASTES_TABLE)?;

            let mut record = pastes
                .get(id)?
                .map(|g| Self::extract_latest(g.value()))
                .ok_or(StoreError::NotFound)?;

            record.view_count += 1;
            view_count = record.view_count;

            pastes.insert(id, &VersionedPaste::V1(record))?;
        }

        write_txn.commit()?;
        Ok(view_count)
    }

    fn ping(&self) -> Result<(), StoreError> {
        let read_txn = self.db.begin_read()?;
        let _ = read_txn.open_table(PASTES_TABLE)?;
        Ok(())
    }

    fn list(&self) -> Result<Vec<Paste>, StoreError> {
        let read_txn = self.db.begin_read()?;
        let pastes = read_txn.open_table(PASTES_TABLE)?;
        let mut all = Vec::new();

        for entry in pastes.iter()? {
            let (id_guard, record_guard) = entry?;
            all.push(Paste::from_record(
                id_guard.value(),
                Self::extract_latest(record_guard.value()),
            ));
        }

        all.sort_by_key(|p| Reverse(p.created_at));
        Ok(all)
    }

    fn ttl_expired(&self, now: SystemTime) -> Result<Vec<PasteId>, StoreError> {
        let read_txn = self.db.begin_read()?;
        TTL_EXPIRY.due(&read_txn, now)
    }
}
