//! Inbound wire payload shapes and their binding into validated requests.
//!
//! Payloads mirror the wire format: optional fields everywhere, due dates
//! as unix seconds. Binding rejects the whole payload on the first
//! offending field; a bound request carries no unchecked data. The payload
//! shapes have no status field (create/update) and no owner or identifier
//! field at all, so those cannot arrive through the body.

use crate::tasks::domain::TaskDomainError;
use crate::tasks::requests::{
    CreateTaskRequest, StatusChangeRequest, UpdateTaskRequest, ValidationError,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Wire payload for creating or updating a task.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskPayload {
    /// Task title; required by binding.
    pub title: Option<String>,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Optional due date as unix seconds.
    pub date: Option<i64>,
}

impl TaskPayload {
    /// Binds the payload into a validated create request.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Title`] when the title is absent, empty,
    /// or over-long, and [`ValidationError::Date`] when the unix timestamp
    /// is unrepresentable.
    pub fn bind_create(self) -> Result<CreateTaskRequest, ValidationError> {
        let (title, description, due_date) = self.into_validated_parts()?;
        let mut request = CreateTaskRequest::new(title)?;
        if let Some(text) = description {
            request = request.with_description(text);
        }
        if let Some(at) = due_date {
            request = request.with_due_date(at);
        }
        Ok(request)
    }

    /// Binds the payload into a validated update request.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Title`] when the title is absent, empty,
    /// or over-long, and [`ValidationError::Date`] when the unix timestamp
    /// is unrepresentable.
    pub fn bind_update(self) -> Result<UpdateTaskRequest, ValidationError> {
        let (title, description, due_date) = self.into_validated_parts()?;
        let mut request = UpdateTaskRequest::new(title)?;
        if let Some(text) = description {
            request = request.with_description(text);
        }
        if let Some(at) = due_date {
            request = request.with_due_date(at);
        }
        Ok(request)
    }

    fn into_validated_parts(
        self,
    ) -> Result<(String, Option<String>, Option<DateTime<Utc>>), ValidationError> {
        let Self {
            title,
            description,
            date,
        } = self;
        let title = title.ok_or(ValidationError::Title(TaskDomainError::EmptyTitle))?;
        let due_date = date.map(parse_unix_seconds).transpose()?;
        Ok((title, description, due_date))
    }
}

/// Wire payload for a status change.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusPayload {
    /// Target status text; required by binding.
    pub status: Option<String>,
}

impl StatusPayload {
    /// Binds the payload into a validated status-change request.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingStatus`] when the field is absent
    /// and [`ValidationError::Status`] when the text is outside the closed
    /// status set.
    pub fn bind(self) -> Result<StatusChangeRequest, ValidationError> {
        let raw = self.status.ok_or(ValidationError::MissingStatus)?;
        StatusChangeRequest::parse(&raw)
    }
}

/// Converts unix seconds into a UTC timestamp.
fn parse_unix_seconds(seconds: i64) -> Result<DateTime<Utc>, ValidationError> {
    DateTime::<Utc>::from_timestamp(seconds, 0).ok_or(ValidationError::Date(seconds))
}
