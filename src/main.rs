use anyhow::Context;
use tracing_subscriber::EnvFilter;

use devops_info_service::config::{Config, LogFormat};
use devops_info_service::state::AppState;

fn init_tracing(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.default_log_level().into());
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .json()
            .init(),
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env().context("load configuration")?;
    init_tracing(&config);
    tracing::debug!(?config, "configuration loaded");

    let state = AppState::new();
    let app = devops_info_service::create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr.as_str())
        .await
        .with_context(|| format!("bind {}", addr))?;
    tracing::info!(
        "Starting DevOps Info Service on {}",
        listener.local_addr().context("local_addr")?
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("axum::serve")?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();
    #[cfg(unix)]
    {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = ctrl_c => {},
                    _ = sigterm.recv() => {},
                }
            }
            Err(e) => {
                tracing::warn!("failed to install SIGTERM handler: {}", e);
                ctrl_c.await.ok();
            }
        }
    }
    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
    }
    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
