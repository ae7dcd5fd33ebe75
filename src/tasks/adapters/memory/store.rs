//! In-memory store for task lifecycle tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::auth::UserId;
use crate::tasks::{
    domain::{Task, TaskId},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, Task>,
    // Per-owner IDs in insertion order; this is what makes find_by_owner
    // stable.
    owner_index: HashMap<UserId, Vec<TaskId>>,
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn store(&self, task: &Task) -> TaskStoreResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))?;

        if state.tasks.contains_key(&task.id()) {
            return Err(TaskStoreError::DuplicateTask(task.id()));
        }

        state
            .owner_index
            .entry(task.owner_id())
            .or_default()
            .push(task.id());
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn update(&self, task: &Task) -> TaskStoreResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))?;

        if !state.tasks.contains_key(&task.id()) {
            return Err(TaskStoreError::NotFound(task.id()));
        }

        // The owner is immutable, so the owner index needs no maintenance
        // here.
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskStoreResult<Option<Task>> {
        let state = self
            .state
            .read()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn find_by_owner(&self, owner_id: UserId) -> TaskStoreResult<Vec<Task>> {
        let state = self
            .state
            .read()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))?;
        let tasks = state
            .owner_index
            .get(&owner_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.tasks.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default();
        Ok(tasks)
    }

    async fn delete(&self, id: TaskId) -> TaskStoreResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))?;

        let removed = state.tasks.remove(&id).ok_or(TaskStoreError::NotFound(id))?;

        if let Some(ids) = state.owner_index.get_mut(&removed.owner_id()) {
            ids.retain(|task_id| *task_id != id);
            if ids.is_empty() {
                state.owner_index.remove(&removed.owner_id());
            }
        }
        Ok(())
    }
}
