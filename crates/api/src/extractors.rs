//! Path extractors for catalog routes.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use folio_core::types::ProjectId;

use crate::error::AppError;

/// The `{id}` segment of `/projects/{id}`.
///
/// A segment that is not an integer cannot name a stored project, so it is
/// answered as a missing project rather than as a malformed request.
#[derive(Debug, Clone, Copy)]
pub struct ProjectIdPath(pub ProjectId);

impl<S> FromRequestParts<S> for ProjectIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        raw.trim().parse().map(Self).map_err(|_| {
            tracing::debug!(segment = %raw, "Non-numeric project id");
            AppError::NotFound("Project not found".into())
        })
    }
}
