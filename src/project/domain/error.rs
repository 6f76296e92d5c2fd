//! Error types for project domain validation and parsing.

use super::ProjectId;
use thiserror::Error;

/// Errors returned while constructing or mutating projects.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectDomainError {
    /// The project name is empty after trimming.
    #[error("project name must not be empty")]
    EmptyName,

    /// The referenced project is not loaded.
    #[error("project not found: {0}")]
    NotFound(ProjectId),

    /// The status value is outside the closed status set.
    #[error(transparent)]
    InvalidStatus(#[from] ParseProjectStatusError),
}

/// Error returned while parsing project statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown project status: {0}")]
pub struct ParseProjectStatusError(pub String);
