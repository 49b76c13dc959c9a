//! Serve command - runs the HTTP server

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use crate::config::{AppConfig, ExecutionMode};
use crate::infrastructure::logging;

/// Run the server, or only assemble it when configured for test mode
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&logging::LoggingConfig::from(&config.logging));

    let app = crate::create_app();

    if config.server.mode == ExecutionMode::Test {
        info!("Test mode: server startup suppressed");
        return Ok(());
    }

    let addr = build_socket_addr(&config)?;
    let listener = TcpListener::bind(addr).await?;
    info!("Server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

fn build_socket_addr(config: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_socket_addr() {
        let config = AppConfig::default();
        let addr = build_socket_addr(&config).unwrap();
        assert_eq!(addr.to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_build_socket_addr_rejects_hostname() {
        let mut config = AppConfig::default();
        config.server.host = "localhost".to_string();
        assert!(build_socket_addr(&config).is_err());
    }
}
