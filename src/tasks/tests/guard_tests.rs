//! Unit tests for the ownership guard.

use std::sync::Arc;

use crate::auth::{Caller, UserId};
use crate::tasks::{
    adapters::memory::InMemoryTaskStore,
    domain::{Task, TaskId, TaskTitle},
    ports::TaskStore,
    services::{AccessError, OwnershipGuard, require_caller},
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn store() -> Arc<InMemoryTaskStore> {
    Arc::new(InMemoryTaskStore::new())
}

async fn seed_task(store: &InMemoryTaskStore, owner_id: UserId, raw_title: &str) -> Task {
    let clock = DefaultClock;
    let title = TaskTitle::new(raw_title).expect("valid title");
    let task = Task::new(owner_id, title, None, None, &clock);
    store.store(&task).await.expect("seeding should succeed");
    task
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn owner_is_granted_the_resolved_task(store: Arc<InMemoryTaskStore>) {
    let owner = Caller::new(UserId::new());
    let task = seed_task(&store, owner.id(), "Buy milk").await;
    let guard = OwnershipGuard::new(Arc::clone(&store));

    let resolved = guard
        .authorize(&task.id().to_string(), &owner)
        .await
        .expect("owner should be granted access");

    assert_eq!(resolved, task);
}

#[rstest]
#[case("42")]
#[case("not-a-uuid")]
#[tokio::test(flavor = "multi_thread")]
async fn malformed_identifier_fails_fast(store: Arc<InMemoryTaskStore>, #[case] raw_id: &str) {
    let caller = Caller::new(UserId::new());
    let guard = OwnershipGuard::new(store);

    let result = guard.authorize(raw_id, &caller).await;

    assert!(matches!(result, Err(AccessError::InvalidTaskId(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_task_is_not_found(store: Arc<InMemoryTaskStore>) {
    let caller = Caller::new(UserId::new());
    let guard = OwnershipGuard::new(store);
    let missing = TaskId::new();

    let result = guard.authorize(&missing.to_string(), &caller).await;

    assert!(matches!(result, Err(AccessError::NotFound(id)) if id == missing));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn foreign_owner_is_denied(store: Arc<InMemoryTaskStore>) {
    let owner_id = UserId::new();
    let task = seed_task(&store, owner_id, "Private task").await;
    let intruder = Caller::new(UserId::new());
    let guard = OwnershipGuard::new(store);

    let result = guard.authorize(&task.id().to_string(), &intruder).await;

    assert!(matches!(
        result,
        Err(AccessError::Denied { task_id, user_id })
            if task_id == task.id() && user_id == intruder.id()
    ));
}

#[rstest]
fn require_caller_passes_through_a_present_identity() {
    let caller = Caller::new(UserId::new());
    let resolved = require_caller(Some(caller)).expect("identity should pass through");
    assert_eq!(resolved, caller);
}

#[rstest]
fn absent_identity_is_an_internal_fault() {
    let result = require_caller(None);
    assert!(matches!(result, Err(AccessError::MissingIdentity)));
}
