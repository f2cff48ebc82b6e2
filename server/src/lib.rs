pub mod clock;
pub mod config;
pub mod error;
pub mod state;
pub mod telemetry;
pub mod web {
    pub mod dto;
    pub mod handlers;
    pub mod pages;
    pub mod router;
}

use pastebin_core::{AccessService, store};
use tracing::info;

use crate::state::AppState;

/// Opens the configured store and wires the router around it.
pub fn build_app(cfg: &config::Config) -> anyhow::Result<axum::Router> {
    let store = store::open(&cfg.app.storage)?;
    info!(backend = %cfg.app.storage.backend, data_dir = %cfg.app.storage.data_dir.display(), "store opened");

    Ok(build_router(AccessService::new(store), cfg))
}

/// Router over an already constructed service.
pub fn build_router(service: AccessService, cfg: &config::Config) -> axum::Router {
    let state = AppState {
        service,
        public_base_url: cfg
            .app
            .server
            .public_base_url
            .as_deref()
            .map(|base| base.trim_end_matches('/').to_string()),
        test_mode: cfg.test_mode,
    };

    crate::web::router::build_router(state)
}
