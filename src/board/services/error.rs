//! Service-level errors.

use crate::persistence::ApiError;
use crate::project::domain::ProjectDomainError;
use crate::task::domain::TaskDomainError;
use thiserror::Error;

/// Errors surfaced by board operations.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Task input or lookup failed.
    #[error(transparent)]
    Task(#[from] TaskDomainError),
    /// Project input or lookup failed.
    #[error(transparent)]
    Project(#[from] ProjectDomainError),
    /// The persistence API rejected the call.
    #[error(transparent)]
    Api(#[from] ApiError),
    /// No project is selected.
    #[error("no project is selected")]
    NoProjectSelected,
    /// The workspace lock was poisoned by a panicking writer.
    #[error("board state unavailable: {0}")]
    StateUnavailable(String),
    /// The board template failed to render.
    #[error("board rendering failed: {0}")]
    Render(String),
}

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;
