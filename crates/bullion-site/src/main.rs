//! Site entry point.
//!
//! Loads configuration, builds the backend client, and serves the router
//! until SIGINT or SIGTERM.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use bullion_core::api::HttpApi;
use bullion_site::config::SiteConfig;
use bullion_site::routes;
use bullion_site::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = SiteConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .json()
        .init();

    info!(
        backend = %config.backend_url,
        source = ?config.product_source,
        timeout = ?config.request_timeout,
        "bullion site starting"
    );

    let api = HttpApi::new(&config.api_config()).context("failed to build backend client")?;
    let state = Arc::new(
        AppState::new(Arc::new(api), config.product_source)
            .with_render_deadline(config.render_deadline),
    );
    let app = routes::build_router(state);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr))?;

    info!(addr = %config.bind_addr, "bullion site listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("bullion site stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.ok();
    };

    #[cfg(unix)]
    let terminate = async {
        if let Ok(mut sig) =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
        {
            sig.recv().await;
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("shutdown signal received, stopping server");
}
