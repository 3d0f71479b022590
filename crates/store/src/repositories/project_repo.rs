//! Repository for the project catalog document.

use chrono::Utc;
use folio_core::catalog::{self, IdStrategy, ReorderMode, Reordered};
use folio_core::error::CoreError;
use folio_core::project::{NewProject, Project, ProjectPatch};
use folio_core::seed;
use folio_core::types::ProjectId;

use crate::error::{RepoError, StoreError};
use crate::store::ProjectStore;

const ENTITY: &str = "Project";

/// What [`ProjectRepo::seed_defaults`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The catalog was empty and now holds the built-in set.
    Seeded { added: usize, total: usize },
    /// The catalog already had projects; nothing was written.
    Skipped { count: usize },
}

/// Snapshot reported by [`ProjectRepo::seed_status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedStatus {
    pub count: usize,
    pub has_defaults: bool,
}

/// Provides CRUD, reorder and seed operations for projects.
///
/// Every operation reads the full document and mutating ones rewrite it,
/// holding the store's write lock for the whole cycle.
pub struct ProjectRepo;

impl ProjectRepo {
    /// All projects in display order.
    pub async fn list(store: &ProjectStore) -> Result<Vec<Project>, StoreError> {
        store.load().await
    }

    /// Find a project by id.
    pub async fn find_by_id(
        store: &ProjectStore,
        id: ProjectId,
    ) -> Result<Option<Project>, StoreError> {
        Ok(store.load().await?.into_iter().find(|p| p.id == id))
    }

    /// Like [`find_by_id`](Self::find_by_id) but a miss is `NotFound`.
    pub async fn get(store: &ProjectStore, id: ProjectId) -> Result<Project, RepoError> {
        Self::find_by_id(store, id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Validate `input`, assign an id and append the project.
    ///
    /// Nothing is read or written when validation fails.
    pub async fn create(
        store: &ProjectStore,
        input: NewProject,
        strategy: IdStrategy,
    ) -> Result<Project, RepoError> {
        input.validate()?;

        let _guard = store.lock().await;
        let mut projects = store.load().await?;

        let id = strategy.next_id(&projects);
        if projects.iter().any(|p| p.id == id) {
            tracing::warn!(project_id = id, "Assigned id already exists in catalog");
        }

        let project = input.into_project(id, Utc::now());
        projects.push(project.clone());
        store.save(&projects).await?;

        tracing::info!(project_id = id, total = projects.len(), "Project created");
        Ok(project)
    }

    /// Merge `patch` onto the stored project. The id never changes.
    pub async fn update(
        store: &ProjectStore,
        id: ProjectId,
        patch: ProjectPatch,
    ) -> Result<Project, RepoError> {
        patch.validate()?;

        let _guard = store.lock().await;
        let mut projects = store.load().await?;

        let project = projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| not_found(id))?;
        patch.apply(project, Utc::now());
        let updated = project.clone();

        store.save(&projects).await?;

        tracing::info!(project_id = id, "Project updated");
        Ok(updated)
    }

    /// Remove the project and return it.
    pub async fn delete(store: &ProjectStore, id: ProjectId) -> Result<Project, RepoError> {
        let _guard = store.lock().await;
        let mut projects = store.load().await?;

        let index = projects
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| not_found(id))?;
        let removed = projects.remove(index);

        store.save(&projects).await?;

        tracing::info!(project_id = id, remaining = projects.len(), "Project deleted");
        Ok(removed)
    }

    /// Rewrite the catalog in the order given by `order`.
    ///
    /// In [`ReorderMode::Lenient`] any stored project not listed is removed.
    pub async fn reorder(
        store: &ProjectStore,
        order: &[ProjectId],
        mode: ReorderMode,
    ) -> Result<Reordered, RepoError> {
        let _guard = store.lock().await;
        let projects = store.load().await?;

        let result = catalog::reorder(projects, order, mode)?;
        if !result.dropped.is_empty() {
            tracing::warn!(
                dropped = ?result.dropped,
                "Reorder omitted stored projects; they were removed from the catalog"
            );
        }
        if !result.unknown.is_empty() {
            tracing::debug!(unknown = ?result.unknown, "Reorder listed unknown ids");
        }

        store.save(&result.projects).await?;

        tracing::info!(total = result.projects.len(), "Projects reordered");
        Ok(result)
    }

    /// Populate an empty catalog with the built-in projects.
    pub async fn seed_defaults(store: &ProjectStore) -> Result<SeedOutcome, RepoError> {
        let _guard = store.lock().await;
        let existing = store.load().await?;

        if !existing.is_empty() {
            tracing::debug!(count = existing.len(), "Catalog not empty, skipping seed");
            return Ok(SeedOutcome::Skipped {
                count: existing.len(),
            });
        }

        let defaults = seed::default_projects(Utc::now())?;
        store.save(&defaults).await?;

        tracing::info!(added = defaults.len(), "Default projects seeded");
        Ok(SeedOutcome::Seeded {
            added: defaults.len(),
            total: defaults.len(),
        })
    }

    /// Count of stored projects and whether any built-in id remains.
    pub async fn seed_status(store: &ProjectStore) -> Result<SeedStatus, StoreError> {
        let projects = store.load().await?;
        Ok(SeedStatus {
            count: projects.len(),
            has_defaults: seed::has_defaults(&projects),
        })
    }
}

fn not_found(id: ProjectId) -> RepoError {
    RepoError::Core(CoreError::NotFound { entity: ENTITY, id })
}
