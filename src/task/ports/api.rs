//! Persistence API port for tasks.

use crate::persistence::ApiResult;
use crate::project::domain::ProjectId;
use crate::task::domain::{Assignee, Task, TaskDetails, TaskId, TaskPriority, TaskStatus};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Task persistence contract.
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// Lists every task of a project.
    async fn list_for_project(&self, project_id: ProjectId) -> ApiResult<Vec<Task>>;

    /// Creates a not-started task and returns the stored record.
    async fn create(&self, record: &NewTaskRecord) -> ApiResult<Task>;

    /// Applies a partial update and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`crate::persistence::ApiError::NotFound`] when the task no
    /// longer exists.
    async fn update(&self, id: TaskId, changes: &TaskChanges) -> ApiResult<Task>;

    /// Deletes a task.
    async fn delete(&self, id: TaskId) -> ApiResult<()>;
}

/// Payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaskRecord {
    /// Owning project.
    pub project_id: ProjectId,
    /// Validated details.
    pub details: TaskDetails,
}

/// Partial task update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChanges {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New assignee.
    pub assignee: Option<Assignee>,
    /// New due date.
    pub due_date: Option<DateTime<Utc>>,
    /// New priority.
    pub priority: Option<TaskPriority>,
    /// New status.
    pub status: Option<TaskStatus>,
}

impl TaskChanges {
    /// Change set carrying only a status, as sent after a cross-column move.
    #[must_use]
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

impl From<TaskDetails> for TaskChanges {
    fn from(details: TaskDetails) -> Self {
        Self {
            title: Some(details.title),
            description: Some(details.description),
            assignee: Some(details.assignee),
            due_date: details.due_date,
            priority: Some(details.priority),
            status: None,
        }
    }
}
