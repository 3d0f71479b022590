//! Validation and naming for project image uploads.

use uuid::Uuid;

use crate::error::CoreError;

/// Default upload ceiling (20 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// An image received from the admin UI, before it is written anywhere.
#[derive(Debug, Clone)]
pub struct ImageUpload<'a> {
    pub file_name: Option<&'a str>,
    pub content_type: Option<&'a str>,
    pub size: usize,
}

impl ImageUpload<'_> {
    /// Accept only `image/*` content no larger than `max_bytes`.
    pub fn validate(&self, max_bytes: usize) -> Result<(), CoreError> {
        let is_image = self
            .content_type
            .is_some_and(|ct| ct.trim().to_ascii_lowercase().starts_with("image/"));
        if !is_image {
            return Err(CoreError::Validation("Please select an image file".into()));
        }
        if self.size == 0 {
            return Err(CoreError::Validation("Uploaded file is empty".into()));
        }
        if self.size > max_bytes {
            return Err(CoreError::Validation(format!(
                "File size must be less than {}MB",
                max_bytes / (1024 * 1024)
            )));
        }
        Ok(())
    }

    /// Collision-free file name for storage, keeping a sane extension.
    pub fn stored_name(&self) -> String {
        format!("{}.{}", Uuid::new_v4(), self.extension())
    }

    fn extension(&self) -> String {
        let from_name = self
            .file_name
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .filter(|ext| !ext.is_empty() && ext.len() <= 5)
            .filter(|ext| ext.chars().all(|c| c.is_ascii_alphanumeric()));

        from_name.unwrap_or_else(|| {
            match self.content_type.map(|ct| ct.trim().to_ascii_lowercase()) {
                Some(ct) if ct == "image/jpeg" => "jpg".into(),
                Some(ct) if ct == "image/svg+xml" => "svg".into(),
                Some(ct) => ct
                    .strip_prefix("image/")
                    .filter(|s| !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric()))
                    .unwrap_or("img")
                    .to_string(),
                None => "img".into(),
            }
        })
    }
}
