//! File-watching preview server.
//!
//! Serves the rendering of a portfolio source file and reloads connected
//! browsers whenever the file changes on disk. Local tooling: no auth, one
//! shared document.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    http::{header, HeaderMap},
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use tokio::sync::RwLock;

use folio_model::Portfolio;
use folio_render::{Renderer, Theme};

use crate::error::ServerError;
use crate::reload::{reload_client_script, ReloadHub, ReloadMessage};
use crate::routes::inject_reload_client;
use crate::source::load_portfolio;
use crate::watcher::{FileWatcher, WatchEvent};

/// Configuration for the preview server.
#[derive(Debug, Clone)]
pub struct PreviewServerConfig {
    /// Portfolio source file (TOML or JSON)
    pub file: PathBuf,

    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,

    /// Open browser on start
    pub open: bool,

    /// Theme for rendering
    pub theme: Theme,
}

impl Default for PreviewServerConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("portfolio.toml"),
            port: 4000,
            host: "127.0.0.1".to_string(),
            open: true,
            theme: Theme::default(),
        }
    }
}

/// Shared preview state.
struct PreviewState {
    portfolio: RwLock<Portfolio>,
    renderer: Renderer,
    hub: ReloadHub,
}

/// Live preview server for a portfolio source file.
pub struct PreviewServer {
    config: PreviewServerConfig,
}

impl PreviewServer {
    /// Create a new preview server.
    pub fn new(config: PreviewServerConfig) -> Self {
        Self { config }
    }

    /// Start the preview server.
    pub async fn start(self) -> Result<(), ServerError> {
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port)
            .parse()
            .map_err(|_| {
                ServerError::InvalidAddress(format!("{}:{}", self.config.host, self.config.port))
            })?;

        let portfolio = load_portfolio(&self.config.file)?;
        let state = Arc::new(PreviewState {
            portfolio: RwLock::new(portfolio),
            renderer: Renderer::new(self.config.theme.clone()),
            hub: ReloadHub::new(),
        });

        // Watch the parent directory; editors replace files rather than
        // modify them in place, so watching the file alone misses saves.
        let watch_dir = self
            .config
            .file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        let (watcher, mut rx) = FileWatcher::new(&[watch_dir])
            .map_err(|e| ServerError::WatchError(e.to_string()))?;

        let source_file = self.config.file.clone();
        let state_clone = Arc::clone(&state);
        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                handle_watch_event(&state_clone, &source_file, event).await;
            }
            // Keep watcher alive
            drop(watcher);
        });

        let app = Router::new()
            .route("/", get(index_handler))
            .route("/download", get(download_handler))
            .route("/__reload", get(ws_handler))
            .route("/__reload.js", get(reload_script_handler))
            .with_state(state);

        tracing::info!(
            "Previewing {} at http://{}",
            self.config.file.display(),
            addr
        );

        if self.config.open {
            let url = format!("http://{}", addr);
            let _ = open::that(&url);
        }

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        Ok(())
    }
}

/// Reload the source file and broadcast when it changes.
async fn handle_watch_event(state: &Arc<PreviewState>, source_file: &Path, event: WatchEvent) {
    let path = match &event {
        WatchEvent::PortfolioModified(path)
        | WatchEvent::Created(path)
        | WatchEvent::Modified(path) => path,
        WatchEvent::Deleted(_) => return,
    };

    let matches_source = source_file
        .file_name()
        .is_some_and(|name| path.file_name() == Some(name));
    if !matches_source {
        return;
    }

    match load_portfolio(source_file) {
        Ok(portfolio) => {
            tracing::info!("Portfolio source changed: {}", source_file.display());
            *state.portfolio.write().await = portfolio;
            state.hub.send(ReloadMessage::Reload);
        }
        Err(e) => {
            // Keep the last good aggregate; a half-saved file shouldn't
            // blank the preview.
            tracing::warn!("Ignoring unparseable portfolio source: {}", e);
        }
    }
}

/// Handler for the preview page.
async fn index_handler(State(state): State<Arc<PreviewState>>) -> impl IntoResponse {
    let portfolio = state.portfolio.read().await.clone();

    match state.renderer.render(&portfolio) {
        Ok(html) => Html(inject_reload_client(html)).into_response(),
        Err(e) => {
            tracing::error!("Render error: {e}");
            Html(format!(
                "<!DOCTYPE html><html><body><p>Failed to render portfolio: {}</p></body></html>",
                e
            ))
            .into_response()
        }
    }
}

/// Handler for downloading the standalone document.
async fn download_handler(State(state): State<Arc<PreviewState>>) -> impl IntoResponse {
    let portfolio = state.portfolio.read().await.clone();

    match state.renderer.render(&portfolio) {
        Ok(html) => (
            [
                (header::CONTENT_TYPE, "text/html; charset=utf-8"),
                (
                    header::CONTENT_DISPOSITION,
                    r#"attachment; filename="portfolio.html""#,
                ),
            ],
            html,
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Render error: {e}");
            axum::http::StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Handler for the reload WebSocket endpoint.
async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<PreviewState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, state))
}

async fn handle_ws(mut socket: WebSocket, state: Arc<PreviewState>) {
    let mut rx = state.hub.subscribe();

    let msg = serde_json::to_string(&ReloadMessage::Connected).unwrap();
    if socket.send(Message::Text(msg.into())).await.is_err() {
        return;
    }

    while let Ok(reload_msg) = rx.recv().await {
        let json = serde_json::to_string(&reload_msg).unwrap();
        if socket.send(Message::Text(json.into())).await.is_err() {
            break;
        }
    }
}

/// Handler for the reload client script.
async fn reload_script_handler(headers: HeaderMap) -> impl IntoResponse {
    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("127.0.0.1");
    let script = reload_client_script(&format!("ws://{}/__reload", host));
    ([(header::CONTENT_TYPE, "application/javascript")], script)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_server_with_default_config() {
        let server = PreviewServer::new(PreviewServerConfig::default());
        assert_eq!(server.config.port, 4000);
        assert!(server.config.open);
    }

    #[tokio::test]
    async fn watch_event_for_other_files_is_ignored() {
        let state = Arc::new(PreviewState {
            portfolio: RwLock::new(Portfolio::default()),
            renderer: Renderer::new(Theme::default()),
            hub: ReloadHub::new(),
        });
        let mut rx = state.hub.subscribe();

        handle_watch_event(
            &state,
            &PathBuf::from("portfolio.toml"),
            WatchEvent::Modified(PathBuf::from("notes.txt")),
        )
        .await;

        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn watch_event_reloads_the_source() {
        let temp = tempfile::tempdir().unwrap();
        let file = temp.path().join("portfolio.toml");
        std::fs::write(&file, "[profile]\nname = \"Ada\"").unwrap();

        let state = Arc::new(PreviewState {
            portfolio: RwLock::new(Portfolio::default()),
            renderer: Renderer::new(Theme::default()),
            hub: ReloadHub::new(),
        });
        let mut rx = state.hub.subscribe();

        handle_watch_event(&state, &file, WatchEvent::PortfolioModified(file.clone())).await;

        assert_eq!(state.portfolio.read().await.profile.name, "Ada");
        assert!(matches!(rx.try_recv(), Ok(ReloadMessage::Reload)));
    }
}
