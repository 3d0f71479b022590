//! Response envelope types for API handlers.
//!
//! Payloads are wrapped in the keys the site's admin UI reads
//! (`projects`, `project`, `message`, ...). Use these structs instead of
//! ad-hoc `serde_json::json!` bodies.

use folio_core::project::Project;
use serde::Serialize;

/// `{ "projects": [...] }`
#[derive(Debug, Serialize)]
pub struct ProjectsResponse {
    pub projects: Vec<Project>,
}

/// `{ "project": {...} }`
#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub project: Project,
}

/// `{ "message": "...", "project": {...} }` for create, update and delete.
#[derive(Debug, Serialize)]
pub struct ProjectMessageResponse {
    pub message: &'static str,
    pub project: Project,
}

/// `{ "message": "...", "projects": [...] }` for reorder.
#[derive(Debug, Serialize)]
pub struct ProjectsMessageResponse {
    pub message: &'static str,
    pub projects: Vec<Project>,
}

/// Result of `POST /projects/init`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SeedResponse {
    Seeded {
        message: &'static str,
        added: usize,
        total: usize,
    },
    Skipped {
        message: &'static str,
        count: usize,
    },
}

/// Result of `GET /projects/init`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedStatusResponse {
    pub message: &'static str,
    pub count: usize,
    pub has_defaults: bool,
}

/// `{ "message": "..." }`
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// `{ "success": true, "url": "..." }` for image uploads.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub url: String,
}
