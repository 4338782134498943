//! Notes client - a browser front-end for a notes backend.
//!
//! The application is organized into the following modules:
//!
//! - `api`: Backend REST client
//! - `controller`: Client state, backend calls and re-rendering
//! - `templates`: HTML/CSS templates and rendering
//! - `handlers`: HTTP route handlers for browser events

use anyhow::Context;
use std::sync::Arc;
use tokio::signal::ctrl_c;
#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use notes_client::{config::ClientConfig, handlers, AppState};

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = ClientConfig::from_env().context("loading configuration")?;
    let bind_addr = config.bind_addr.clone();

    let state = Arc::new(AppState::new(config).context("building HTTP client")?);
    state.controller.init().await;

    let app = handlers::router(state.clone()).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("binding to {}", bind_addr))?;

    info!("Notes client running at http://{}", bind_addr);
    info!("Backend: {}", state.controller.api().base_url());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Notes client shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
