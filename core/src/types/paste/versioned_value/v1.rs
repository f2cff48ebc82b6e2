use serde::{Deserialize, Serialize};
use std::time::SystemTime;

use super::ValueVariant;

/// Version 1 of the stored paste body. The id is the table key and is not repeated here.
#[cfg_attr(test, derive(Eq, PartialEq))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasteRecord {
    pub content: String,
    pub created_at: SystemTime,
    pub expires_at: Option<SystemTime>,
    pub max_views: Option<u64>,
    pub view_count: u64,
}

impl ValueVariant for PasteRecord {
    const VERSION: u8 = 1;
}
