//! Outward-facing task representation.

use crate::tasks::domain::Task;
use serde::Serialize;
use uuid::Uuid;

/// Outward representation of one task.
///
/// Exposes only the fields meant for the wire: the owner identifier and the
/// lifecycle timestamps stay internal. Due dates are converted to unix
/// seconds, mirroring the inbound payload convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskResource {
    /// Task identifier.
    pub id: Uuid,
    /// Task title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional due date as unix seconds.
    pub date: Option<i64>,
    /// Lifecycle status in its canonical spelling.
    pub status: String,
}

impl TaskResource {
    /// Maps one task to its outward representation.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: task.id().into_inner(),
            title: task.title().as_str().to_owned(),
            description: task.description().map(ToOwned::to_owned),
            date: task.due_date().map(|at| at.timestamp()),
            status: task.status().as_str().to_owned(),
        }
    }

    /// Maps an ordered sequence of tasks, preserving order.
    #[must_use]
    pub fn collection(tasks: &[Task]) -> Vec<Self> {
        tasks.iter().map(Self::from_task).collect()
    }
}
