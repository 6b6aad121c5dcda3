use anyhow::Context as _;
use sea_orm::Database;
use tracing::info;

use backoffice_core::tracing::init_tracing;
use backoffice_staffs::config::StaffsConfig;
use backoffice_staffs::router::build_router;
use backoffice_staffs::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = StaffsConfig::from_env()?;

    let db = Database::connect(&config.database_url)
        .await
        .context("failed to connect to database")?;

    let router = build_router(AppState { db });
    let http_addr = format!("0.0.0.0:{}", config.staffs_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .with_context(|| format!("failed to bind {http_addr}"))?;

    info!("staffs service listening on {http_addr}");
    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
