//! Shared wizard server state.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use folio_model::PortfolioStore;
use folio_render::{Renderer, Theme};

use crate::reload::ReloadHub;

/// A registered user. Lives only as long as the process; nothing in this
/// system durably persists.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Shared application state injected into all route handlers via Axum
/// extractors.
#[derive(Clone)]
pub struct AppState {
    /// Registered users, keyed by email.
    pub users: Arc<RwLock<HashMap<String, User>>>,

    /// Per-user wizard workspaces, created on first authenticated access and
    /// cleared on logout.
    pub workspaces: Arc<RwLock<HashMap<Uuid, PortfolioStore>>>,

    /// Broadcasts a reload to preview panes after every accepted mutation.
    pub reload: ReloadHub,

    pub renderer: Arc<Renderer>,

    pub jwt_secret: Arc<str>,
}

impl AppState {
    pub fn new(theme: Theme, jwt_secret: String) -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            workspaces: Arc::new(RwLock::new(HashMap::new())),
            reload: ReloadHub::new(),
            renderer: Arc::new(Renderer::new(theme)),
            jwt_secret: jwt_secret.into(),
        }
    }
}
