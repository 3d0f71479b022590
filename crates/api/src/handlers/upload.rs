//! Handler for project image uploads.

use axum::extract::{Multipart, State};
use axum::Json;
use folio_core::upload::ImageUpload;

use crate::error::{AppError, AppResult};
use crate::middleware::admin::RequireAdmin;
use crate::response::UploadResponse;
use crate::state::AppState;

/// POST /api/upload
///
/// Multipart form with a single `file` field holding the image.
pub async fn upload_image(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    let upload_config = &state.config.upload;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue; // ignore unknown fields
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await?;

        let upload = ImageUpload {
            file_name: file_name.as_deref(),
            content_type: content_type.as_deref(),
            size: data.len(),
        };
        upload.validate(upload_config.max_bytes)?;

        let stored_name = upload.stored_name();
        tokio::fs::create_dir_all(&upload_config.dir)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to create upload dir: {e}")))?;
        let path = upload_config.dir.join(&stored_name);
        tokio::fs::write(&path, &data)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to write upload: {e}")))?;

        let url = format!(
            "{}/{stored_name}",
            upload_config.url_prefix.trim_end_matches('/')
        );
        tracing::info!(path = %path.display(), size = data.len(), "Image uploaded");
        return Ok(Json(UploadResponse { success: true, url }));
    }

    Err(AppError::BadRequest("No file uploaded".into()))
}
