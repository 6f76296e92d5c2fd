//! Store invariant violations.

use super::ColumnId;
use crate::task::domain::{TaskId, TaskStatus};
use thiserror::Error;

/// A broken link between the task map and the columns.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConsistencyError {
    /// A column lists an id with no task behind it.
    #[error("column {column} lists unknown task {task_id}")]
    Orphan {
        /// Column holding the id.
        column: ColumnId,
        /// Unknown task id.
        task_id: TaskId,
    },

    /// A task id appears more than once across the columns.
    #[error("task {0} is listed more than once")]
    Duplicate(TaskId),

    /// A task sits in a column that does not match its status.
    #[error("task {task_id} has status {status} but sits in {column}")]
    StatusMismatch {
        /// Misplaced task.
        task_id: TaskId,
        /// The task's status.
        status: TaskStatus,
        /// The column holding it.
        column: ColumnId,
    },

    /// A stored task is absent from every column.
    #[error("task {0} is missing from the columns")]
    Unplaced(TaskId),
}
