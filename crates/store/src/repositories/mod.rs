//! Catalog operations over [`ProjectStore`](crate::ProjectStore).

pub mod project_repo;

pub use project_repo::{ProjectRepo, SeedOutcome, SeedStatus};
