#![allow(dead_code)]

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use folio_api::config::{ServerConfig, UploadConfig};
use folio_api::mail::{MailError, Mailer};
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_core::catalog::{IdStrategy, ReorderMode};
use folio_core::contact::ContactMessage;
use folio_core::upload::DEFAULT_MAX_UPLOAD_BYTES;
use folio_store::ProjectStore;
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Build a test `ServerConfig` rooted in `dir`.
///
/// Uses `http://localhost:3000` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config(dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        data_dir: dir.join("data"),
        id_strategy: IdStrategy::Length,
        reorder_mode: ReorderMode::Lenient,
        admin_token: None,
        upload: UploadConfig {
            dir: dir.join("uploads"),
            url_prefix: "/project-images".to_string(),
            max_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        },
        email: None,
    }
}

/// Build the full application router with all middleware layers.
pub fn build_test_app(dir: &Path) -> Router {
    build_test_app_with(test_config(dir), None)
}

/// Same as [`build_test_app`] with an explicit config and mailer.
pub fn build_test_app_with(config: ServerConfig, mailer: Option<Arc<dyn Mailer>>) -> Router {
    let state = AppState {
        store: Arc::new(ProjectStore::new(&config.data_dir)),
        config: Arc::new(config.clone()),
        mailer,
    };
    build_app_router(state, &config)
}

/// Mailer that records what it was asked to send.
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<ContactMessage>>,
    pub fail: bool,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send_contact(&self, message: &ContactMessage) -> Result<(), MailError> {
        if self.fail {
            return Err(MailError::Build("forced failure".into()));
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::POST, uri, &body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::PUT, uri, &body)).await
}

pub fn json_request(method: Method, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A create payload with every required field.
pub fn project_payload(title: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "description": format!("{title} in brief"),
        "longDescription": format!("{title} at length"),
        "github": format!("https://github.com/example/{title}"),
        "technologies": ["Rust", "Axum"],
        "features": ["Fast"],
        "liveDemo": "#",
        "status": "In Progress",
    })
}

/// Ids of the catalog in display order, via the HTTP API.
pub async fn listed_ids(app: Router) -> Vec<i64> {
    let json = body_json(get(app, "/api/projects").await).await;
    json["projects"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect()
}
