//! Task aggregate root.

use super::{TaskId, TaskStatus, TaskTitle};
use crate::auth::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
///
/// A task belongs to exactly one owner for its whole lifetime: `id` and
/// `owner_id` are assigned at construction and never mutated. `status`
/// starts at [`TaskStatus::New`] and changes only through
/// [`Task::set_status`]; the general field update deliberately cannot touch
/// it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    owner_id: UserId,
    title: TaskTitle,
    description: Option<String>,
    due_date: Option<DateTime<Utc>>,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owner identifier.
    pub owner_id: UserId,
    /// Persisted task title.
    pub title: TaskTitle,
    /// Persisted task description, if any.
    pub description: Option<String>,
    /// Persisted due date, if any.
    pub due_date: Option<DateTime<Utc>>,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task owned by `owner_id` with [`TaskStatus::New`]
    /// status.
    #[must_use]
    pub fn new(
        owner_id: UserId,
        title: TaskTitle,
        description: Option<String>,
        due_date: Option<DateTime<Utc>>,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            owner_id,
            title,
            description,
            due_date,
            status: TaskStatus::New,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            owner_id: data.owner_id,
            title: data.title,
            description: data.description,
            due_date: data.due_date,
            status: data.status,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning user's identifier.
    #[must_use]
    pub const fn owner_id(&self) -> UserId {
        self.owner_id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the task lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns `true` when the task belongs to the given user.
    #[must_use]
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }

    /// Replaces the title, description, and due date.
    ///
    /// The status, identifier, and owner are carried over unchanged; a
    /// general update is not allowed to move the lifecycle status.
    pub fn update_details(
        &mut self,
        title: TaskTitle,
        description: Option<String>,
        due_date: Option<DateTime<Utc>>,
        clock: &impl Clock,
    ) {
        self.title = title;
        self.description = description;
        self.due_date = due_date;
        self.touch(clock);
    }

    /// Replaces the lifecycle status, leaving every other field untouched.
    ///
    /// Any status may move to any other status; the closed set itself is the
    /// only constraint, and [`TaskStatus`] enforces it by construction.
    pub fn set_status(&mut self, status: TaskStatus, clock: &impl Clock) {
        self.status = status;
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
