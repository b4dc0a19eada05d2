//! Server Implementation
//!
//! HTTP 服务器启动和管理

use std::future::IntoFuture;
use std::net::SocketAddr;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::core::{Config, Result, ServerError, ServerState};
use crate::services::http::build_router;

/// HTTP Server
pub struct Server {
    config: Config,
    state: Option<ServerState>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Create server with existing state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    /// Serve until Ctrl-C
    pub async fn run(&self) -> Result<()> {
        let shutdown = CancellationToken::new();
        let trigger = shutdown.clone();
        tokio::spawn(async move {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
            trigger.cancel();
        });
        self.run_until(shutdown).await
    }

    /// Serve until `shutdown` is cancelled.
    ///
    /// In-flight requests get `shutdown_timeout_ms` to finish.
    pub async fn run_until(&self, shutdown: CancellationToken) -> Result<()> {
        let state = match &self.state {
            Some(s) => s.clone(),
            None => ServerState::initialize(&self.config).await?,
        };

        let app = build_router(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind {
                port: self.config.http_port,
                source,
            })?;

        tracing::info!("🍽  Banquet server listening on {}", addr);
        tracing::info!("Data directory: {}", self.config.data_dir.display());
        if self.config.is_production() {
            tracing::info!("Serving static files from {}", self.config.static_dir.display());
        }

        let grace = Duration::from_millis(self.config.shutdown_timeout_ms);
        let serve = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown.clone().cancelled_owned())
            .into_future();

        tokio::select! {
            res = serve => res?,
            _ = async {
                shutdown.cancelled().await;
                tokio::time::sleep(grace).await;
            } => {
                tracing::warn!("Graceful shutdown timed out after {:?}", grace);
            }
        }

        tracing::info!("Server stopped");
        Ok(())
    }
}
