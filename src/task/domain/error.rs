//! Error types for task domain validation and parsing.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors returned while constructing or changing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the storage limit.
    #[error("title cannot be more than {max} characters (got {actual})")]
    TitleTooLong {
        /// Maximum permitted length.
        max: usize,
        /// Length of the rejected value.
        actual: usize,
    },

    /// The task description is empty after trimming.
    #[error("task description must not be empty")]
    EmptyDescription,

    /// The task description exceeds the storage limit.
    #[error("description cannot be more than {max} characters (got {actual})")]
    DescriptionTooLong {
        /// Maximum permitted length.
        max: usize,
        /// Length of the rejected value.
        actual: usize,
    },

    /// The due date lies before the current time.
    #[error("due date {due_date} is in the past (now {now})")]
    DueDateInPast {
        /// Rejected due date.
        due_date: DateTime<Utc>,
        /// Clock reading used for the comparison.
        now: DateTime<Utc>,
    },
}

/// Error returned while parsing a task status string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0} is not a valid status")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing a task priority string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0} is not a valid priority")]
pub struct ParseTaskPriorityError(pub String);
