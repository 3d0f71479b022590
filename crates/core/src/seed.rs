//! Built-in example projects used to populate an empty catalog.

use crate::error::CoreError;
use crate::project::Project;
use crate::types::Timestamp;

/// Number of projects in the built-in set. Their ids run `1..=12`.
pub const DEFAULT_PROJECT_COUNT: usize = 12;

const DEFAULT_PROJECTS_JSON: &str = include_str!("../data/default_projects.json");

/// The built-in example projects, in display order, stamped with `seeded_at`.
pub fn default_projects(seeded_at: Timestamp) -> Result<Vec<Project>, CoreError> {
    let mut projects: Vec<Project> = serde_json::from_str(DEFAULT_PROJECTS_JSON)
        .map_err(|e| CoreError::Internal(format!("Bundled default projects are invalid: {e}")))?;
    for project in &mut projects {
        project.created_at = Some(seeded_at);
    }
    Ok(projects)
}

/// Whether `projects` still contains any id from the built-in range.
pub fn has_defaults(projects: &[Project]) -> bool {
    projects
        .iter()
        .any(|p| p.id >= 1 && p.id <= DEFAULT_PROJECT_COUNT as i64)
}
