use std::sync::Arc;

use folio_store::ProjectStore;

use crate::config::ServerConfig;
use crate::mail::Mailer;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The catalog document.
    pub store: Arc<ProjectStore>,
    /// Server configuration (catalog rules, admin token, upload limits).
    pub config: Arc<ServerConfig>,
    /// Contact-form mailer; `None` when SMTP is not configured.
    pub mailer: Option<Arc<dyn Mailer>>,
}
