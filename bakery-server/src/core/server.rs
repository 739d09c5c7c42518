use std::net::SocketAddr;

use super::{Config, Result, ServerState};

/// HTTP server
pub struct Server {
    config: Config,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Open the database, then serve until Ctrl-C
    pub async fn run(self) -> Result<()> {
        let state = ServerState::initialize(&self.config).await?;

        let app = crate::routes::build_app(&state);

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!(
            environment = %self.config.environment,
            admin_guard = self.config.admin_guard_enabled,
            "Bakery server listening on {}",
            addr
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutting down...");
}
