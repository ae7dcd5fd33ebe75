//! Validated mutation request variants.
//!
//! Each inbound mutation binds to exactly one concrete request type with its
//! own validation rules, replacing any notion of a shared generic binder. A
//! request value is fully validated at construction: once one exists, every
//! field in it is usable without further checks. None of the variants
//! carries an owner or a task identifier, and only the status-change variant
//! carries a status, so a payload cannot smuggle either past the binder.

use super::domain::{ParseTaskStatusError, TaskDomainError, TaskStatus, TaskTitle};
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors returned while binding an inbound payload, naming the offending
/// field.
///
/// A binding failure rejects the whole request; no partially-validated
/// request value is ever produced.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The `title` field is missing, empty, or over-long.
    #[error("field 'title': {0}")]
    Title(TaskDomainError),

    /// The `status` field is absent from a status-change payload.
    #[error("field 'status': a value from the status set is required")]
    MissingStatus,

    /// The `status` field is outside the closed status set.
    #[error("field 'status': {0}")]
    Status(ParseTaskStatusError),

    /// The `date` field is outside the representable timestamp range.
    #[error("field 'date': {0} is not a valid unix timestamp")]
    Date(i64),
}

/// Validated request to create a task.
///
/// Carries no status and no owner: creation always starts at
/// [`TaskStatus::New`] with the authenticated caller as owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    /// Validated task title.
    pub title: TaskTitle,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Optional due date.
    pub due_date: Option<DateTime<Utc>>,
}

impl CreateTaskRequest {
    /// Creates a request with a validated title.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Title`] when the title is empty after
    /// trimming or over-long.
    pub fn new(title: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            title: TaskTitle::new(title).map_err(ValidationError::Title)?,
            description: None,
            due_date: None,
        })
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Validated request to update a task's editable fields.
///
/// Shares the create shape but is validated independently. The fields it
/// names are the only fields a plain update may change; status, identifier,
/// and owner are out of its reach by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    /// Validated replacement title.
    pub title: TaskTitle,
    /// Replacement description; `None` clears it.
    pub description: Option<String>,
    /// Replacement due date; `None` clears it.
    pub due_date: Option<DateTime<Utc>>,
}

impl UpdateTaskRequest {
    /// Creates a request with a validated title.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Title`] when the title is empty after
    /// trimming or over-long.
    pub fn new(title: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            title: TaskTitle::new(title).map_err(ValidationError::Title)?,
            description: None,
            due_date: None,
        })
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the replacement due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Validated request to move a task to another lifecycle status.
///
/// Carries only the target status; every other task field is out of reach
/// of a status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChangeRequest {
    /// Target status, guaranteed to be a member of the closed set.
    pub status: TaskStatus,
}

impl StatusChangeRequest {
    /// Creates a request for an already-typed status.
    #[must_use]
    pub const fn new(status: TaskStatus) -> Self {
        Self { status }
    }

    /// Parses a request from raw status text.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Status`] when the text names no member of
    /// the closed status set.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        TaskStatus::try_from(raw)
            .map(Self::new)
            .map_err(ValidationError::Status)
    }
}
