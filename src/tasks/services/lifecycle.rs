//! Service layer for task creation, mutation, and removal.
//!
//! Provides [`TaskLifecycleService`] which coordinates create, read,
//! update, status-change, and delete operations against the store. The
//! ownership guard runs before any of these; mutating operations still
//! re-check ownership themselves so a call that reaches the service
//! directly is rejected all the same.

use crate::auth::{Caller, UserId};
use crate::tasks::{
    domain::{Task, TaskId, TaskStatus},
    ports::{TaskStore, TaskStoreError},
    requests::{CreateTaskRequest, UpdateTaskRequest},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The task belongs to another user.
    #[error("task {task_id} does not belong to user {user_id}")]
    AccessDenied {
        /// The targeted task.
        task_id: TaskId,
        /// The caller that was refused.
        user_id: UserId,
    },

    /// Store operation failed. Never swallowed; each call is all-or-nothing
    /// against the store, so a failure leaves no partial change.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
}

/// Result type for task lifecycle service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskLifecycleService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
}

impl<S, C> TaskLifecycleService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Creates a new task owned by the caller.
    ///
    /// The status is forced to [`TaskStatus::New`] and the owner is forced
    /// from the authenticated caller; nothing in the request can override
    /// either. No ownership check applies since there is no prior resource
    /// to own.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Store`] when persistence fails.
    pub async fn create(
        &self,
        request: CreateTaskRequest,
        caller: &Caller,
    ) -> TaskServiceResult<Task> {
        let CreateTaskRequest {
            title,
            description,
            due_date,
        } = request;
        let task = Task::new(caller.id(), title, description, due_date, &*self.clock);
        self.store.store(&task).await?;
        Ok(task)
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task exists under the
    /// identifier, or [`TaskServiceError::Store`] when the lookup fails.
    pub async fn find(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.find_or_error(id).await
    }

    /// Returns all tasks owned by the given user, in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Store`] when the lookup fails.
    pub async fn find_all(&self, owner_id: UserId) -> TaskServiceResult<Vec<Task>> {
        Ok(self.store.find_by_owner(owner_id).await?)
    }

    /// Replaces the editable fields of a guard-resolved task.
    ///
    /// Exactly `title`, `description`, and `due_date` change; status,
    /// identifier, and owner are carried over untouched. Ownership is
    /// re-checked even though the guard already ran.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::AccessDenied`] when the task belongs to
    /// another user, or [`TaskServiceError::Store`] when persistence fails.
    pub async fn update(
        &self,
        mut task: Task,
        request: UpdateTaskRequest,
        caller: &Caller,
    ) -> TaskServiceResult<Task> {
        Self::ensure_owned(&task, caller)?;

        let UpdateTaskRequest {
            title,
            description,
            due_date,
        } = request;
        task.update_details(title, description, due_date, &*self.clock);
        self.store.update(&task).await?;
        Ok(task)
    }

    /// Moves a task to another lifecycle status.
    ///
    /// Only `status` changes; every other field is left untouched. Set
    /// membership is guaranteed by the [`TaskStatus`] type, and no
    /// adjacency rule restricts which status may follow which.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task exists under the
    /// identifier, [`TaskServiceError::AccessDenied`] when it belongs to
    /// another user, or [`TaskServiceError::Store`] when persistence fails.
    pub async fn update_status(
        &self,
        id: TaskId,
        status: TaskStatus,
        caller: &Caller,
    ) -> TaskServiceResult<Task> {
        let mut task = self.find_or_error(id).await?;
        Self::ensure_owned(&task, caller)?;

        task.set_status(status, &*self.clock);
        self.store.update(&task).await?;
        Ok(task)
    }

    /// Removes a task permanently.
    ///
    /// Irreversible; the identifier becomes invalid for all subsequent
    /// operations.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task exists under the
    /// identifier, [`TaskServiceError::AccessDenied`] when it belongs to
    /// another user, or [`TaskServiceError::Store`] when persistence fails.
    pub async fn delete(&self, id: TaskId, caller: &Caller) -> TaskServiceResult<()> {
        let task = self.find_or_error(id).await?;
        Self::ensure_owned(&task, caller)?;

        self.store.delete(id).await?;
        Ok(())
    }

    async fn find_or_error(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))
    }

    fn ensure_owned(task: &Task, caller: &Caller) -> TaskServiceResult<()> {
        if task.is_owned_by(caller.id()) {
            return Ok(());
        }
        log::warn!(
            "refused lifecycle operation on task {}: caller {} is not the owner",
            task.id(),
            caller.id()
        );
        Err(TaskServiceError::AccessDenied {
            task_id: task.id(),
            user_id: caller.id(),
        })
    }
}
