//! Income Tax Calculator server.
//!
//! Reads `HOST` and `PORT` from the environment, then serves the calculator
//! API until interrupted.

use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use income_tax_calculator::api::create_router;
use income_tax_calculator::config::ServerConfig;
use income_tax_calculator::error::{EngineError, EngineResult};

#[tokio::main]
async fn main() -> EngineResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let config = ServerConfig::from_env()?;
    let addr = config.socket_addr();

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| EngineError::Bind {
            addr: addr.to_string(),
            message: e.to_string(),
        })?;
    info!(%addr, "Server running on port {}", config.port);

    axum::serve(listener, create_router())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| EngineError::Server {
            message: e.to_string(),
        })?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves when the process receives Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
