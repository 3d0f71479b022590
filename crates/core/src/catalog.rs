//! Catalog rules: id assignment and reordering.
//!
//! Both rules come in two flavours. The legacy flavour reproduces what the
//! site has always done; the other closes the hole the legacy one leaves.
//! Which one runs is a deployment choice (see `ServerConfig`).

use std::collections::{HashMap, HashSet};
use std::str::FromStr;

use crate::error::CoreError;
use crate::project::Project;
use crate::types::ProjectId;

// ---------------------------------------------------------------------------
// Id assignment
// ---------------------------------------------------------------------------

/// How the catalog picks the id for a newly created project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdStrategy {
    /// `collection size + 1`. Reuses an id after a deletion that is not the
    /// last record, which can produce duplicates.
    #[default]
    Length,
    /// `largest stored id + 1`. Never collides with a stored record.
    NextAfterMax,
}

impl IdStrategy {
    /// Id to assign to the next project appended to `projects`.
    pub fn next_id(self, projects: &[Project]) -> ProjectId {
        match self {
            Self::Length => projects.len() as ProjectId + 1,
            Self::NextAfterMax => projects.iter().map(|p| p.id).max().unwrap_or(0) + 1,
        }
    }
}

impl FromStr for IdStrategy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "length" => Ok(Self::Length),
            "next-after-max" => Ok(Self::NextAfterMax),
            other => Err(CoreError::Validation(format!(
                "Unknown id strategy '{other}'. Must be one of: length, next-after-max"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Reordering
// ---------------------------------------------------------------------------

/// How a reorder request that does not list every stored id is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReorderMode {
    /// Keep only the listed ids, in the listed order. Stored records that
    /// are not listed are removed from the catalog.
    #[default]
    Lenient,
    /// Reject anything that is not a permutation of the stored ids.
    Strict,
}

impl FromStr for ReorderMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            other => Err(CoreError::Validation(format!(
                "Unknown reorder mode '{other}'. Must be one of: lenient, strict"
            ))),
        }
    }
}

/// Result of applying a reorder to a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Reordered {
    /// The collection in its new order.
    pub projects: Vec<Project>,
    /// Stored ids that were not listed and are no longer in the collection.
    pub dropped: Vec<ProjectId>,
    /// Listed ids that matched no stored record.
    pub unknown: Vec<ProjectId>,
}

/// Rebuild `projects` in the order given by `order`.
///
/// In lenient mode a repeated id keeps its first position only, so the
/// result never holds two records with the same id.
pub fn reorder(
    projects: Vec<Project>,
    order: &[ProjectId],
    mode: ReorderMode,
) -> Result<Reordered, CoreError> {
    if mode == ReorderMode::Strict {
        check_permutation(&projects, order)?;
    }

    let stored_order: Vec<ProjectId> = projects.iter().map(|p| p.id).collect();
    let mut by_id: HashMap<ProjectId, Project> = HashMap::with_capacity(projects.len());
    for project in projects {
        by_id.entry(project.id).or_insert(project);
    }

    let mut reordered = Vec::with_capacity(order.len());
    let mut unknown = Vec::new();
    let mut seen = HashSet::new();
    for id in order {
        if !seen.insert(*id) {
            continue;
        }
        match by_id.remove(id) {
            Some(project) => reordered.push(project),
            None => unknown.push(*id),
        }
    }

    let dropped = stored_order
        .into_iter()
        .filter(|id| !seen.contains(id))
        .collect();

    Ok(Reordered {
        projects: reordered,
        dropped,
        unknown,
    })
}

fn check_permutation(projects: &[Project], order: &[ProjectId]) -> Result<(), CoreError> {
    let stored: HashSet<ProjectId> = projects.iter().map(|p| p.id).collect();
    let mut listed = HashSet::with_capacity(order.len());

    for id in order {
        if !listed.insert(*id) {
            return Err(CoreError::Validation(format!(
                "projectIds lists id {id} more than once"
            )));
        }
        if !stored.contains(id) {
            return Err(CoreError::Validation(format!(
                "projectIds contains unknown id {id}"
            )));
        }
    }

    let mut missing: Vec<ProjectId> = stored.difference(&listed).copied().collect();
    if !missing.is_empty() {
        missing.sort_unstable();
        return Err(CoreError::Validation(format!(
            "projectIds must list every project; missing {missing:?}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
