//! Pantry Server — Application entry point.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use pantry_server::config::ServerConfig;
use pantry_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("pantry_server=info".parse()?)
                .add_directive("pantry_db=info".parse()?),
        )
        .json()
        .init();

    tracing::info!("Starting Pantry server...");

    let config = ServerConfig::load()?;

    let manager = pantry_db::DbManager::connect(&config.db).await?;
    pantry_db::run_migrations(manager.client()).await?;

    let state = Arc::new(AppState::new(manager.client().clone()));
    let app = pantry_server::router(state, Arc::new(config.auth));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Pantry server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.ok();
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
