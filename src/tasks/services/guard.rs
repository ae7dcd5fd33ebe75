//! Ownership guard: resolve a target task and assert single-owner access.
//!
//! The guard runs before any handler logic. It parses the raw path
//! identifier, resolves the task through the store, and checks that the
//! caller owns it, returning the resolved task as an explicit value for the
//! next pipeline stage rather than smuggling it through request context.

use crate::auth::{Caller, UserId};
use crate::tasks::{
    domain::{ParseTaskIdError, Task, TaskId},
    ports::{TaskStore, TaskStoreError},
};
use std::sync::Arc;
use thiserror::Error;

/// Errors produced while authorizing access to a task.
///
/// A missing task and a foreign-owned task are deliberately distinct
/// outcomes (`NotFound` vs `Denied`); callers observing both can infer
/// which identifiers exist. The split is kept because denial semantics are
/// part of the service contract.
#[derive(Debug, Error)]
pub enum AccessError {
    /// The raw path identifier is not a well-formed task identifier.
    #[error(transparent)]
    InvalidTaskId(#[from] ParseTaskIdError),

    /// No task exists under the identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The task exists but belongs to another user.
    #[error("task {task_id} does not belong to user {user_id}")]
    Denied {
        /// The targeted task.
        task_id: TaskId,
        /// The caller that was refused.
        user_id: UserId,
    },

    /// No caller identity reached the guard; the upstream authenticator
    /// failed to attach one. A pipeline configuration fault, not an
    /// authorization outcome.
    #[error("caller identity missing from the request pipeline")]
    MissingIdentity,

    /// The store failed while resolving the task.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
}

/// Per-resource ownership guard.
#[derive(Clone)]
pub struct OwnershipGuard<S>
where
    S: TaskStore,
{
    store: Arc<S>,
}

impl<S> OwnershipGuard<S>
where
    S: TaskStore,
{
    /// Creates a new ownership guard over the given store.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Resolves the task named by the raw path identifier and asserts the
    /// caller owns it.
    ///
    /// Read-only: the lookup is the only side effect. On success the
    /// resolved task is returned for downstream stages to use directly.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::InvalidTaskId`] for malformed identifiers,
    /// [`AccessError::NotFound`] when no task exists under the identifier,
    /// [`AccessError::Denied`] when the task belongs to another user, and
    /// [`AccessError::Store`] when the lookup itself fails.
    pub async fn authorize(&self, raw_id: &str, caller: &Caller) -> Result<Task, AccessError> {
        let task_id = TaskId::parse(raw_id)?;
        let task = self
            .store
            .find_by_id(task_id)
            .await?
            .ok_or(AccessError::NotFound(task_id))?;

        if !task.is_owned_by(caller.id()) {
            log::warn!(
                "denied access to task {task_id}: caller {} is not the owner",
                caller.id()
            );
            return Err(AccessError::Denied {
                task_id,
                user_id: caller.id(),
            });
        }

        Ok(task)
    }
}

/// Converts an optionally-present upstream identity into a caller.
///
/// Guard and service operations take the caller explicitly; this is the one
/// boundary where absence can still occur, and it is an internal fault of
/// the surrounding pipeline rather than a user error.
///
/// # Errors
///
/// Returns [`AccessError::MissingIdentity`] when the authenticator attached
/// no identity.
pub const fn require_caller(caller: Option<Caller>) -> Result<Caller, AccessError> {
    match caller {
        Some(identity) => Ok(identity),
        None => Err(AccessError::MissingIdentity),
    }
}
