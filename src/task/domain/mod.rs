//! Domain model for board tasks.
//!
//! Tasks carry their editable details, a status that decides which board
//! column lists them, and lifecycle timestamps. Infrastructure concerns such
//! as the persistence API stay outside this boundary.

mod draft;
mod error;
mod ids;
mod status;
mod task;

pub use draft::{Assignee, MissingFields, TaskDetails, TaskDraft, TaskField};
pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use status::{TaskPriority, TaskStatus};
pub use task::{PersistedTaskData, Task};
