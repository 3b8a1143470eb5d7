use tokio::net::TcpListener;

use press_staging::StagingStore;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::handler::AppState;
use crate::router::build_router;
use crate::transform::TransformService;

/// Compression portal server.
pub struct PressServer {
    config: ServerConfig,
}

impl PressServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router, opening the staging store (useful for testing).
    pub fn router(&self) -> ServerResult<axum::Router> {
        let staging = StagingStore::open(self.config.staging_root.clone())?;
        let service = TransformService::new(staging);
        Ok(build_router(AppState {
            service,
            config: self.config.clone(),
        }))
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router()?;
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("press server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_construction() {
        let server = PressServer::new(ServerConfig::default());
        assert_eq!(server.config().bind_addr, "127.0.0.1:5000".parse().unwrap());
    }

    #[test]
    fn router_builds() {
        let dir = tempfile::tempdir().unwrap();
        let server = PressServer::new(ServerConfig {
            staging_root: dir.path().to_path_buf(),
            ..ServerConfig::default()
        });
        let _router = server.router().unwrap();
    }
}
