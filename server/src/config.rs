use anyhow::{Context, bail};
use pastebin_core::types::{AppConfig, StorageBackend};
use std::path::PathBuf;

const DEFAULT_CONFIG_PATH: &str = "pastebin.toml";

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub app: AppConfig,
    pub test_mode: bool,
}

impl Config {
    /// Reads `.env`, then the TOML file named by `PASTEBIN_CONFIG`, then env overrides.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let path = std::env::var("PASTEBIN_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));
        let app = AppConfig::load(&path)
            .with_context(|| format!("reading config file {}", path.display()))?;

        Self::from_env(app, |key| std::env::var(key).ok())
    }

    /// Applies overrides from `var` on top of `app` and validates the result.
    pub fn from_env(
        mut app: AppConfig,
        var: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<Self> {
        if let Some(bind) = var("BIND") {
            app.server.bind = bind;
        }
        if let Some(port) = var("PORT") {
            app.server.port = port
                .trim()
                .parse()
                .with_context(|| format!("PORT is not a valid port: {port:?}"))?;
        }
        if let Some(base) = var("PUBLIC_BASE_URL").filter(|v| !v.trim().is_empty()) {
            app.server.public_base_url = Some(base.trim().to_string());
        }
        if let Some(backend) = var("PASTEBIN_STORAGE") {
            app.storage.backend = backend.parse::<StorageBackend>()?;
        }
        if let Some(dir) = var("PASTEBIN_DATA_DIR") {
            app.storage.data_dir = PathBuf::from(dir);
        }
        let test_mode = var("TEST_MODE").is_some_and(|v| v.trim() == "1");

        let problems = app.validate();
        if !problems.is_empty() {
            bail!("invalid configuration: {}", problems.join("; "));
        }

        Ok(Self { app, test_mode })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.app.server.bind, self.app.server.port)
    }
}
