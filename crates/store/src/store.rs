//! The catalog document on disk.
//!
//! The whole collection lives in one pretty-printed JSON array. There is no
//! cache: every load reads the file and every save replaces it.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use folio_core::project::Project;
use tokio::sync::{Mutex, MutexGuard};

use crate::error::StoreError;

/// File name of the catalog document inside the data directory.
pub const DOCUMENT_NAME: &str = "projects.json";

/// Reads and writes the full project collection.
#[derive(Debug)]
pub struct ProjectStore {
    path: PathBuf,
    /// Serializes load-modify-save cycles within this process.
    write_lock: Mutex<()>,
}

impl ProjectStore {
    /// Store backed by `<data_dir>/projects.json`.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(DOCUMENT_NAME),
            write_lock: Mutex::new(()),
        }
    }

    /// Location of the catalog document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Hold this guard across a load-modify-save cycle.
    ///
    /// Only mutating operations take it; readers see whichever complete
    /// document the last rename left in place.
    pub async fn lock(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }

    /// Create the data directory if it does not exist. Idempotent.
    pub async fn ensure_location_exists(&self) -> Result<(), StoreError> {
        let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) else {
            return Ok(());
        };
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| StoreError::io(dir, e))
    }

    /// Read the whole collection.
    ///
    /// A missing document (or an empty one) is an empty catalog. Unreadable
    /// or malformed content is an error.
    pub async fn load(&self) -> Result<Vec<Project>, StoreError> {
        self.ensure_location_exists().await?;

        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "Catalog document absent, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Replace the document with `projects`.
    ///
    /// Writes a sibling temp file and renames it over the document, so a
    /// reader never observes a partially written catalog.
    pub async fn save(&self, projects: &[Project]) -> Result<(), StoreError> {
        self.ensure_location_exists().await?;

        let mut body = serde_json::to_vec_pretty(projects).map_err(StoreError::Serialize)?;
        body.push(b'\n');

        let temp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, &body)
            .await
            .map_err(|e| StoreError::io(&temp_path, e))?;
        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| StoreError::io(&self.path, e))?;

        tracing::debug!(path = %self.path.display(), count = projects.len(), "Catalog saved");
        Ok(())
    }
}
