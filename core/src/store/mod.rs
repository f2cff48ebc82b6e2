//! Keyed paste persistence.
//!
//! Every backend offers the same two guarantees the access layer relies on:
//! `create` is a conditional insert that refuses an existing id, and
//! `increment_view` adds one to the stored counter as a single storage operation
//! and hands back the resulting count.

use crate::types::{Paste, PasteId, StorageBackend, StorageConfig};
use error::StoreError;
use std::sync::Arc;
use std::time::SystemTime;

pub(crate) mod db;
pub(crate) mod memory;

pub use db::PasteDb;
pub use memory::MemoryStore;

pub mod error {
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum StoreError {
        #[error("Database error: {0}")]
        Database(#[from] redb::DatabaseError),

        #[error("Table error: {0}")]
        Table(#[from] redb::TableError),

        #[error("Storage error: {0}")]
        Storage(#[from] redb::StorageError),

        #[error("Transaction error: {0}")]
        Transaction(#[from] redb::TransactionError),

        #[error("Commit error: {0}")]
        Commit(#[from] redb::CommitError),

        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),

        #[error("Paste not found")]
        NotFound,

        #[error("Paste id already exists")]
        Conflict,
    }
}

pub trait PasteStore: Send + Sync {
    /// Inserts a new paste keyed by its id.
    ///
    /// Returns `Err(Conflict)` if the id is already taken, whether or not that paste
    /// has expired.
    fn create(&self, paste: Paste) -> Result<Paste, StoreError>;

    /// Returns `Err(NotFound)` if the id was never stored.
    fn get(&self, id: &PasteId) -> Result<Paste, StoreError>;

    /// Atomically adds one view and returns the new authoritative count.
    ///
    /// Returns `Err(NotFound)` if the id was never stored.
    fn increment_view(&self, id: &PasteId) -> Result<u64, StoreError>;

    /// Succeeds if the backend can serve requests.
    fn ping(&self) -> Result<(), StoreError>;

    /// Every stored paste, newest first. Expired pastes are included.
    fn list(&self) -> Result<Vec<Paste>, StoreError>;

    /// Ids whose TTL deadline is at or before `now`, earliest deadline first.
    fn ttl_expired(&self, now: SystemTime) -> Result<Vec<PasteId>, StoreError>;
}

/// Opens the backend selected by the storage config.
pub fn open(config: &StorageConfig) -> Result<Arc<dyn PasteStore>, StoreError> {
    let store: Arc<dyn PasteStore> = match config.backend {
        StorageBackend::Redb => Arc::new(PasteDb::open(&config.store_config())?),
        StorageBackend::Memory => Arc::new(MemoryStore::new()),
    };
    Ok(store)
}
