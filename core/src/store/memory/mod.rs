//! Process-local paste storage.
//!
//! `DashMap` shards its entries behind per-shard locks. Conditional insert goes
//! through the entry API and the view increment mutates through a `get_mut`
//! guard, so both complete under the shard's write lock.

use crate::store::PasteStore;
use crate::store::error::StoreError;
use crate::types::{Paste, PasteId};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::cmp::Reverse;
use std::time::SystemTime;

#[derive(Default)]
pub struct MemoryStore {
    pastes: DashMap<PasteId, Paste>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pastes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pastes.is_empty()
    }
}

impl PasteStore for MemoryStore {
    fn create(&self, paste: Paste) -> Result<Paste, StoreError> {
        match self.pastes.entry(paste.id.clone()) {
            Entry::Occupied(_) => Err(StoreError::Conflict),
            Entry::Vacant(slot) => {
                slot.insert(paste.clone());
                Ok(paste)
            }
        }
    }

    fn get(&self, id: &PasteId) -> Result<Paste, StoreError> {
        self.pastes
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or(StoreError::NotFound)
    }

    fn increment_view(&self, id: &PasteId) -> Result<u64, StoreError> {
        let mut entry = self.pastes.get_mut(id).ok_or(StoreError::NotFound)?;
        entry.view_count += 1;
        Ok(entry.view_count)
    }

    fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    fn list(&self) -> Result<Vec<Paste>, StoreError> {
        let mut all: Vec<Paste> = self
            .pastes
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        all.sort_by_key(|p| Reverse(p.created_at));
        Ok(all)
    }

    fn ttl_expired(&self, now: SystemTime) -> Result<Vec<PasteId>, StoreError> {
        let mut due: Vec<(SystemTime, PasteId)> = self
            .pastes
            .iter()
            .filter_map(|entry| {
                let deadline = entry.expires_at?;
                (deadline <= now).then(|| (deadline, entry.id.clone()))
            })
            .collect();
        due.sort();
        Ok(due.into_iter().map(|(_, id)| id).collect())
    }
}
