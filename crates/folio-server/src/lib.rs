//! Wizard API and live preview servers for folio.
//!
//! Two serving modes share the reload plumbing: the authenticated wizard API
//! (signup/login gate, per-user portfolio CRUD, preview and download
//! endpoints) and the unauthenticated file-watching preview server for local
//! editing.

pub mod auth;
pub mod error;
pub mod preview;
pub mod reload;
pub mod routes;
pub mod source;
pub mod state;
pub mod watcher;
pub mod wizard;

pub use error::{ApiError, ServerError};
pub use preview::{PreviewServer, PreviewServerConfig};
pub use reload::{ReloadHub, ReloadMessage};
pub use source::load_portfolio;
pub use watcher::{FileWatcher, WatchEvent};
pub use wizard::{WizardServer, WizardServerConfig};
