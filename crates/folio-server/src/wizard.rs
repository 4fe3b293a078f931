//! The authenticated wizard server.

use std::net::SocketAddr;

use tower_http::cors::CorsLayer;
use uuid::Uuid;

use folio_render::Theme;

use crate::error::ServerError;
use crate::routes;
use crate::state::AppState;

/// Configuration for the wizard server.
#[derive(Debug, Clone)]
pub struct WizardServerConfig {
    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,

    /// Secret for signing bearer tokens. Generated per process when absent,
    /// which invalidates tokens across restarts, acceptable for a store
    /// that never outlives the process anyway.
    pub jwt_secret: Option<String>,

    /// Theme for preview and download rendering
    pub theme: Theme,
}

impl Default for WizardServerConfig {
    fn default() -> Self {
        Self {
            port: 4100,
            host: "127.0.0.1".to_string(),
            jwt_secret: None,
            theme: Theme::default(),
        }
    }
}

/// Wizard API server: auth gate, per-user portfolio CRUD, live preview and
/// download.
pub struct WizardServer {
    config: WizardServerConfig,
}

impl WizardServer {
    /// Create a new wizard server.
    pub fn new(config: WizardServerConfig) -> Self {
        Self { config }
    }

    /// Start the wizard server.
    pub async fn start(self) -> Result<(), ServerError> {
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port)
            .parse()
            .map_err(|_| {
                ServerError::InvalidAddress(format!("{}:{}", self.config.host, self.config.port))
            })?;

        let jwt_secret = self
            .config
            .jwt_secret
            .unwrap_or_else(|| Uuid::new_v4().simple().to_string());

        let state = AppState::new(self.config.theme, jwt_secret);

        let app = routes::router(state).layer(CorsLayer::permissive());

        tracing::info!("Starting wizard server at http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_server_with_default_config() {
        let server = WizardServer::new(WizardServerConfig::default());
        assert_eq!(server.config.port, 4100);
        assert!(server.config.jwt_secret.is_none());
    }
}
