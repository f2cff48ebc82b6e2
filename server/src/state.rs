use pastebin_core::AccessService;

#[derive(Clone)]
pub struct AppState {
    pub service: AccessService,
    /// Share-link prefix without a trailing slash.
    pub public_base_url: Option<String>,
    /// Honour the `x-test-now-ms` header.
    pub test_mode: bool,
}
