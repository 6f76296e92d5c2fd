//! Error types for task domain validation and parsing.

use super::{MissingFields, TaskId};
use thiserror::Error;

/// Errors returned while constructing or editing task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// One or more required fields are empty after trimming.
    #[error("missing required task fields: {missing}")]
    Validation {
        /// Every field that failed the non-empty check.
        missing: MissingFields,
    },

    /// The priority is not one of `low`, `medium` or `high`.
    #[error("invalid task priority '{0}', expected low, medium or high")]
    InvalidPriority(String),

    /// The status value is outside the closed status set.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),

    /// The referenced task is not present.
    #[error("task not found: {0}")]
    NotFound(TaskId),
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
