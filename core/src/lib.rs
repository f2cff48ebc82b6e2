pub mod id;
pub mod policy;
pub mod service;
pub mod store;
pub mod types;

pub use service::AccessService;
pub use service::error::{ServiceError, ValidationErrors};
pub use store::error::StoreError;
pub use store::{MemoryStore, PasteDb, PasteStore};
