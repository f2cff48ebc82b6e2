mod app;
mod store;

pub use app::{AppConfig, AppConfigError, ServerConfig, StorageBackend, StorageConfig};
pub use store::Config;

#[cfg(test)]
mod tests;
