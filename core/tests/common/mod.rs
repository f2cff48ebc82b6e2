use pastebin_core::types::Config;
use pastebin_core::{AccessService, MemoryStore, PasteDb, PasteStore};
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

pub fn t0() -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_millis(1_767_225_600_000)
}

/// A service per backend. The `TempDir` must outlive the redb service.
pub fn services() -> (Vec<(&'static str, AccessService)>, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db = PasteDb::open(&Config {
        base_path: temp_dir.path().to_path_buf(),
    })
    .unwrap();

    let redb: Arc<dyn PasteStore> = Arc::new(db);
    let memory: Arc<dyn PasteStore> = Arc::new(MemoryStore::new());
    (
        vec![
            ("redb", AccessService::new(redb)),
            ("memory", AccessService::new(memory)),
        ],
        temp_dir,
    )
}
