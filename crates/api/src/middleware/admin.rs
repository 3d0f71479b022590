//! Optional bearer-token gate for catalog mutations.
//!
//! The admin UI only hides mutation controls behind its client-side session
//! flag; the server itself trusts every caller. Setting `ADMIN_TOKEN` closes
//! that gap: every handler taking [`RequireAdmin`] then demands
//! `Authorization: Bearer <token>`. Without it the extractor always succeeds.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use folio_core::error::CoreError;
use subtle::ConstantTimeEq;

use crate::error::AppError;
use crate::state::AppState;

/// Proof that the request may mutate the catalog.
///
/// ```ignore
/// async fn delete(_admin: RequireAdmin, ...) -> AppResult<...> { ... }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RequireAdmin;

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(expected) = state.config.admin_token.as_deref() else {
            return Ok(RequireAdmin);
        };

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let token_matches: bool = token.trim().as_bytes().ct_eq(expected.as_bytes()).into();
        if !token_matches {
            tracing::warn!("Rejected catalog mutation with wrong admin token");
            return Err(AppError::Core(CoreError::Unauthorized(
                "Invalid admin token".into(),
            )));
        }

        Ok(RequireAdmin)
    }
}
