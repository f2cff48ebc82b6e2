pub(crate) mod config;
pub use config::{AppConfig, AppConfigError, Config, ServerConfig, StorageBackend, StorageConfig};

pub(crate) mod paste_id;
pub use paste_id::{PASTE_ID_LENGTH, PasteId, PasteIdError};

pub(crate) mod paste;
pub use paste::{NewPaste, Paste, PasteSummary, PasteView};

pub(crate) mod ttl_key;
pub use ttl_key::TtlKey;
