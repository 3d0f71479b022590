//! JSON-file persistence for the project catalog.
//!
//! [`ProjectStore`] owns the on-disk document; [`repositories::ProjectRepo`]
//! implements the catalog operations on top of it.

pub mod error;
pub mod repositories;
pub mod store;

pub use error::{RepoError, StoreError};
pub use store::ProjectStore;

/// Verify the store location is usable (directory exists, document readable).
pub async fn health_check(store: &ProjectStore) -> Result<(), StoreError> {
    store.load().await.map(|_| ())
}
