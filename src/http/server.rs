//! HTTP server startup logic.
//!
//! Plain HTTP only: TLS is terminated by the hosting platform in front of
//! the instance.

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum_server::Handle;

use crate::config::{AppConfig, ConfigError};

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address: {0}")]
    Address(#[from] ConfigError),

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// Start the HTTP server based on configuration.
///
/// This function blocks until the server shuts down.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr = config.http.socket_addr()?;
    let grace = Duration::from_secs(config.http.shutdown_grace_seconds);

    serve_with_handle(app, addr, grace, Handle::new()).await
}

/// Serve `app` on `addr` until `handle` is told to shut down.
///
/// SIGTERM/SIGINT trigger a graceful shutdown through the same handle, so
/// callers holding a clone can read the bound address via
/// `Handle::listening` or stop the server themselves.
pub async fn serve_with_handle(
    app: Router,
    addr: SocketAddr,
    grace: Duration,
    handle: Handle,
) -> Result<(), ServerError> {
    shutdown::setup_shutdown_handler(handle.clone(), grace);

    tracing::info!(%addr, "Starting HTTP server");

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HttpServerConfig;

    #[tokio::test]
    async fn test_start_server_rejects_bad_host() {
        let config = AppConfig {
            http: HttpServerConfig {
                host: "localhost:80".to_string(),
                ..HttpServerConfig::default()
            },
            ..AppConfig::default()
        };

        let err = start_server(Router::new(), &config).await.unwrap_err();
        assert!(matches!(err, ServerError::Address(_)));
    }
}
