//! ServerBuilder for fluent API to build HTTP servers

use super::router::build_simulation_routes;
use crate::config::{AppConfig, ServerConfig};
use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Builder for the simulation HTTP server
///
/// # Example
///
/// ```ignore
/// ServerBuilder::new()
///     .with_config(AppConfig::from_yaml_file("simulation.yaml")?)
///     .serve()
///     .await?;
/// ```
pub struct ServerBuilder {
    config: AppConfig,
    tracing: bool,
}

impl ServerBuilder {
    /// Create a new ServerBuilder with default configuration
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            tracing: true,
        }
    }

    /// Use the given configuration
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Override only the listener settings
    pub fn with_server_config(mut self, server: ServerConfig) -> Self {
        self.config.server = server;
        self
    }

    /// Disable the per-request tracing layer
    pub fn without_tracing(mut self) -> Self {
        self.tracing = false;
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Build the final router
    pub fn build(&self) -> Router {
        let app = build_simulation_routes();

        if self.tracing {
            app.layer(TraceLayer::new_for_http())
        } else {
            app
        }
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the configured host and port
    /// - Serve the simulation routes
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.server.bind_address();
        let app = self.build();
        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_config() {
        let builder = ServerBuilder::new();
        assert_eq!(builder.config(), &AppConfig::default());
    }

    #[test]
    fn test_with_server_config_overrides_listener() {
        let builder = ServerBuilder::new().with_server_config(ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        });
        assert_eq!(builder.config().server.bind_address(), "127.0.0.1:0");
    }

    #[tokio::test]
    async fn test_build_with_and_without_tracing_routes_simulation() {
        use axum::body::Body;
        use axum::http::{Request, StatusCode};
        use tower::ServiceExt;

        for builder in [ServerBuilder::new(), ServerBuilder::new().without_tracing()] {
            let request = Request::builder()
                .method("POST")
                .uri("/simulation")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"amount": 15, "installments": 5}"#))
                .unwrap();

            let response = builder.build().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::ACCEPTED);
        }
    }
}
