//! Catalog behaviour against a real document in a temp directory.

use assert_matches::assert_matches;
use folio_core::catalog::{IdStrategy, ReorderMode};
use folio_core::error::CoreError;
use folio_core::project::{NewProject, ProjectPatch, ProjectStatus, DEFAULT_IMAGE};
use folio_core::seed::DEFAULT_PROJECT_COUNT;
use folio_store::repositories::{ProjectRepo, SeedOutcome};
use folio_store::{ProjectStore, RepoError};
use tempfile::TempDir;

fn store() -> (TempDir, ProjectStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = ProjectStore::new(dir.path().join("data"));
    (dir, store)
}

fn input(title: &str) -> NewProject {
    NewProject {
        title: Some(title.into()),
        description: Some(format!("{title} in brief")),
        long_description: Some(format!("{title} at length")),
        github: Some(format!("https://github.com/example/{title}")),
        ..Default::default()
    }
}

async fn ids(store: &ProjectStore) -> Vec<i64> {
    ProjectRepo::list(store)
        .await
        .unwrap()
        .iter()
        .map(|p| p.id)
        .collect()
}

async fn populate(store: &ProjectStore, n: usize) {
    for i in 0..n {
        ProjectRepo::create(store, input(&format!("p{i}")), IdStrategy::Length)
            .await
            .unwrap();
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_on_empty_store_assigns_id_one() {
    let (_dir, store) = store();
    let project = ProjectRepo::create(&store, input("first"), IdStrategy::Length)
        .await
        .unwrap();

    assert_eq!(project.id, 1);
    assert_eq!(project.image, DEFAULT_IMAGE);
    assert!(project.created_at.is_some());
    assert_eq!(ids(&store).await, vec![1]);
}

#[tokio::test]
async fn create_assigns_size_plus_one() {
    let (_dir, store) = store();
    populate(&store, 4).await;

    let project = ProjectRepo::create(&store, input("fifth"), IdStrategy::Length)
        .await
        .unwrap();
    assert_eq!(project.id, 5);
}

#[tokio::test]
async fn length_strategy_reuses_id_after_delete() {
    let (_dir, store) = store();
    populate(&store, 3).await;
    ProjectRepo::delete(&store, 3).await.unwrap();

    let project = ProjectRepo::create(&store, input("again"), IdStrategy::Length)
        .await
        .unwrap();
    assert_eq!(project.id, 3);

    // Deleting from the middle makes the legacy rule hand out a live id.
    ProjectRepo::delete(&store, 1).await.unwrap();
    let project = ProjectRepo::create(&store, input("clash"), IdStrategy::Length)
        .await
        .unwrap();
    assert_eq!(project.id, 3);
    assert_eq!(ids(&store).await, vec![2, 3, 3]);
}

#[tokio::test]
async fn next_after_max_strategy_avoids_duplicates() {
    let (_dir, store) = store();
    populate(&store, 3).await;
    ProjectRepo::delete(&store, 1).await.unwrap();

    let project = ProjectRepo::create(&store, input("fresh"), IdStrategy::NextAfterMax)
        .await
        .unwrap();
    assert_eq!(project.id, 4);
    assert_eq!(ids(&store).await, vec![2, 3, 4]);
}

#[tokio::test]
async fn create_with_missing_fields_writes_nothing() {
    let (_dir, store) = store();
    let err = ProjectRepo::create(&store, NewProject::default(), IdStrategy::Length)
        .await
        .unwrap_err();

    assert_matches!(
        err,
        RepoError::Core(CoreError::Validation(msg)) if msg.contains("title")
    );
    assert!(!store.path().exists());
}

// ---------------------------------------------------------------------------
// Get / update / delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_missing_is_not_found() {
    let (_dir, store) = store();
    populate(&store, 1).await;

    assert_eq!(ProjectRepo::get(&store, 1).await.unwrap().title, "p0");
    assert_matches!(
        ProjectRepo::get(&store, 9).await,
        Err(RepoError::Core(CoreError::NotFound { id: 9, .. }))
    );
}

#[tokio::test]
async fn update_preserves_id() {
    let (_dir, store) = store();
    populate(&store, 3).await;

    let patch: ProjectPatch =
        serde_json::from_value(serde_json::json!({ "id": 999, "title": "x" })).unwrap();
    let updated = ProjectRepo::update(&store, 2, patch).await.unwrap();

    assert_eq!(updated.id, 2);
    assert_eq!(updated.title, "x");
    assert!(updated.updated_at.is_some());

    let stored = ProjectRepo::get(&store, 2).await.unwrap();
    assert_eq!(stored, updated);
    assert!(ProjectRepo::find_by_id(&store, 999).await.unwrap().is_none());
    assert_eq!(ids(&store).await, vec![1, 2, 3]);
}

#[tokio::test]
async fn update_missing_is_not_found() {
    let (_dir, store) = store();
    populate(&store, 1).await;

    let result = ProjectRepo::update(&store, 5, ProjectPatch::default()).await;
    assert_matches!(result, Err(RepoError::Core(CoreError::NotFound { .. })));
}

#[tokio::test]
async fn delete_missing_leaves_collection_unchanged() {
    let (_dir, store) = store();
    populate(&store, 3).await;
    let before = ProjectRepo::list(&store).await.unwrap();

    let result = ProjectRepo::delete(&store, 42).await;
    assert_matches!(result, Err(RepoError::Core(CoreError::NotFound { id: 42, .. })));

    assert_eq!(ProjectRepo::list(&store).await.unwrap(), before);
}

#[tokio::test]
async fn delete_returns_removed_record() {
    let (_dir, store) = store();
    populate(&store, 3).await;

    let removed = ProjectRepo::delete(&store, 2).await.unwrap();
    assert_eq!(removed.id, 2);
    assert_eq!(ids(&store).await, vec![1, 3]);
}

#[tokio::test]
async fn update_with_unrecognised_status_writes_nothing() {
    let (_dir, store) = store();
    populate(&store, 1).await;
    let before = ProjectRepo::list(&store).await.unwrap();

    let patch: ProjectPatch =
        serde_json::from_value(serde_json::json!({ "title": "x", "status": "Done" })).unwrap();
    let result = ProjectRepo::update(&store, 1, patch).await;

    assert_matches!(result, Err(RepoError::Core(CoreError::Validation(_))));
    assert_eq!(ProjectRepo::list(&store).await.unwrap(), before);
}

#[tokio::test]
async fn record_with_unrecognised_status_does_not_block_catalog() {
    let (_dir, store) = store();
    store.ensure_location_exists().await.unwrap();
    let document = serde_json::json!([
        { "id": 1, "title": "a", "status": "Archived" },
        { "id": 2, "title": "b", "status": "Completed" },
    ]);
    tokio::fs::write(store.path(), serde_json::to_vec_pretty(&document).unwrap())
        .await
        .unwrap();

    let projects = ProjectRepo::list(&store).await.unwrap();
    assert_eq!(projects[0].status, ProjectStatus::Other("Archived".into()));
    assert_eq!(projects[1].status, ProjectStatus::Completed);

    // A mutation rewrites the document and keeps the unrecognised label.
    ProjectRepo::delete(&store, 2).await.unwrap();
    let raw: serde_json::Value =
        serde_json::from_slice(&tokio::fs::read(store.path()).await.unwrap()).unwrap();
    assert_eq!(raw[0]["status"], "Archived");
}

// ---------------------------------------------------------------------------
// Reorder
// ---------------------------------------------------------------------------

#[tokio::test]
async fn reorder_drops_unlisted_records() {
    let (_dir, store) = store();
    populate(&store, 3).await;
    let before = ProjectRepo::list(&store).await.unwrap();

    let result = ProjectRepo::reorder(&store, &[3, 1], ReorderMode::Lenient)
        .await
        .unwrap();
    assert_eq!(result.dropped, vec![2]);

    let after = ProjectRepo::list(&store).await.unwrap();
    assert_eq!(after, vec![before[2].clone(), before[0].clone()]);
}

#[tokio::test]
async fn strict_reorder_rejects_partial_list_and_keeps_store() {
    let (_dir, store) = store();
    populate(&store, 3).await;

    let result = ProjectRepo::reorder(&store, &[3, 1], ReorderMode::Strict).await;
    assert_matches!(result, Err(RepoError::Core(CoreError::Validation(_))));
    assert_eq!(ids(&store).await, vec![1, 2, 3]);

    ProjectRepo::reorder(&store, &[2, 3, 1], ReorderMode::Strict)
        .await
        .unwrap();
    assert_eq!(ids(&store).await, vec![2, 3, 1]);
}

// ---------------------------------------------------------------------------
// Seed
// ---------------------------------------------------------------------------

#[tokio::test]
async fn seed_defaults_runs_once() {
    let (_dir, store) = store();

    let first = ProjectRepo::seed_defaults(&store).await.unwrap();
    assert_eq!(
        first,
        SeedOutcome::Seeded {
            added: DEFAULT_PROJECT_COUNT,
            total: DEFAULT_PROJECT_COUNT
        }
    );

    let second = ProjectRepo::seed_defaults(&store).await.unwrap();
    assert_eq!(
        second,
        SeedOutcome::Skipped {
            count: DEFAULT_PROJECT_COUNT
        }
    );
    assert_eq!(ProjectRepo::list(&store).await.unwrap().len(), DEFAULT_PROJECT_COUNT);
}

#[tokio::test]
async fn seed_skips_non_empty_catalog() {
    let (_dir, store) = store();
    populate(&store, 1).await;

    assert_eq!(
        ProjectRepo::seed_defaults(&store).await.unwrap(),
        SeedOutcome::Skipped { count: 1 }
    );

    let status = ProjectRepo::seed_status(&store).await.unwrap();
    assert_eq!(status.count, 1);
    assert!(status.has_defaults);
}

// ---------------------------------------------------------------------------
// End to end
// ---------------------------------------------------------------------------

#[tokio::test]
async fn seed_delete_reorder_scenario() {
    let (_dir, store) = store();
    ProjectRepo::seed_defaults(&store).await.unwrap();

    let expected: Vec<i64> = (1..=DEFAULT_PROJECT_COUNT as i64).collect();
    assert_eq!(ids(&store).await, expected);

    ProjectRepo::delete(&store, 1).await.unwrap();
    let remaining = ids(&store).await;
    assert_eq!(remaining.len(), DEFAULT_PROJECT_COUNT - 1);
    assert!(!remaining.contains(&1));

    let reversed: Vec<i64> = remaining.iter().rev().copied().collect();
    ProjectRepo::reorder(&store, &reversed, ReorderMode::Lenient)
        .await
        .unwrap();
    assert_eq!(ids(&store).await, reversed);
}

#[tokio::test]
async fn concurrent_creates_are_not_lost() {
    let (_dir, store) = store();
    let store = std::sync::Arc::new(store);

    let mut handles = Vec::new();
    for i in 0..8 {
        let store = std::sync::Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            ProjectRepo::create(&store, input(&format!("c{i}")), IdStrategy::NextAfterMax)
                .await
                .unwrap()
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let mut stored = ids(&store).await;
    stored.sort_unstable();
    assert_eq!(stored, (1..=8).collect::<Vec<i64>>());
}
