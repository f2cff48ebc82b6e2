#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pastebin_server::telemetry::init();
    let cfg = pastebin_server::config::Config::load()?;

    let addr = cfg.listen_addr();
    let app = pastebin_server::build_app(&cfg)?;

    use tracing::info;
    info!(%addr, backend = %cfg.app.storage.backend, test_mode = cfg.test_mode, "server starting");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
