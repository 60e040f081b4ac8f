use anyhow::Context;
use campus_server::{ServerConfig, app, db};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::load().context("failed to load server config")?;
    init_tracing(&config.log_level)?;

    info!("starting campus server");
    let db = db::connect_and_migrate(&config.database_url).await?;

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    info!(addr = %config.bind, "API listening, press Ctrl+C to shut down");

    axum::serve(listener, app(db))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received, stopping server");
    }
}

fn init_tracing(default_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    Ok(())
}
