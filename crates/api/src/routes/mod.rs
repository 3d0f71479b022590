pub mod health;
pub mod project;

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use crate::config::ServerConfig;
use crate::handlers;
use crate::state::AppState;

/// Multipart framing allowance on top of the configured image ceiling.
const UPLOAD_FRAMING_BYTES: usize = 64 * 1024;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                     list, create
/// /projects/{id}                get, update, delete
/// /projects/reorder             rewrite display order (POST)
/// /projects/init                seed status (GET), seed defaults (POST)
///
/// /contact                      send contact form email (POST)
/// /upload                       upload a project image (POST, multipart)
/// ```
pub fn api_routes(config: &ServerConfig) -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .route("/contact", post(handlers::contact::send))
        .route(
            "/upload",
            post(handlers::upload::upload_image).layer(DefaultBodyLimit::max(
                config.upload.max_bytes.saturating_add(UPLOAD_FRAMING_BYTES),
            )),
        )
}
