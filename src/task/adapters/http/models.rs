//! Wire models for the task REST endpoints.

use crate::persistence::ApiError;
use crate::project::domain::ProjectId;
use crate::task::domain::{
    Assignee, PersistedTaskData, Task, TaskId, TaskPriority, TaskStatus,
};
use crate::task::ports::TaskChanges;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task as returned by the API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct TaskRow {
    pub id: TaskId,
    pub project_id: ProjectId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: String,
    #[serde(alias = "assigneeName")]
    pub assignee: String,
    #[serde(default)]
    pub assignee_avatar: Option<String>,
    pub due_date: DateTime<Utc>,
    pub priority: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<TaskRow> for Task {
    type Error = ApiError;

    fn try_from(row: TaskRow) -> Result<Self, Self::Error> {
        let status = TaskStatus::try_from(row.status.as_str())
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        let priority = TaskPriority::try_from(row.priority.as_str())
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        let mut assignee = Assignee::new(row.assignee);
        if let Some(avatar_url) = row.assignee_avatar {
            assignee = assignee.with_avatar(avatar_url);
        }
        Ok(Self::from_persisted(PersistedTaskData {
            id: row.id,
            project_id: row.project_id,
            title: row.title,
            description: row.description,
            status,
            assignee,
            due_date: row.due_date,
            priority,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }))
    }
}

/// `POST /tasks` body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CreateTaskBody<'a> {
    pub project_id: ProjectId,
    pub title: &'a str,
    pub description: &'a str,
    pub assignee: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_avatar: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    pub priority: &'static str,
}

/// `PUT /tasks/:id` body.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct UpdateTaskBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_avatar: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<&'static str>,
}

impl<'a> From<&'a TaskChanges> for UpdateTaskBody<'a> {
    fn from(changes: &'a TaskChanges) -> Self {
        Self {
            title: changes.title.as_deref(),
            description: changes.description.as_deref(),
            assignee: changes.assignee.as_ref().map(Assignee::name),
            assignee_avatar: changes.assignee.as_ref().and_then(Assignee::avatar_url),
            due_date: changes.due_date,
            priority: changes.priority.map(TaskPriority::as_str),
            status: changes.status.map(TaskStatus::as_str),
        }
    }
}
