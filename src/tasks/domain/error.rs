//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the 255-character storage limit.
    #[error("task title exceeds 255 character limit: {0}")]
    TitleTooLong(String),
}

/// Error returned while parsing task statuses from the wire or persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task identifiers from raw path input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("malformed task identifier: {0}")]
pub struct ParseTaskIdError(pub String);
