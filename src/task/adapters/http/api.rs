//! [`TaskApi`] over the REST endpoints.

use async_trait::async_trait;

use super::models::{CreateTaskBody, TaskRow, UpdateTaskBody};
use crate::persistence::{ApiResult, ApiTransport};
use crate::project::domain::ProjectId;
use crate::task::{
    domain::{Task, TaskId},
    ports::{NewTaskRecord, TaskApi, TaskChanges},
};

/// REST client for `/tasks`.
#[derive(Clone)]
pub struct HttpTaskApi {
    transport: ApiTransport,
}

impl HttpTaskApi {
    /// Creates a client over an authenticated transport.
    #[must_use]
    pub const fn new(transport: ApiTransport) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl TaskApi for HttpTaskApi {
    async fn list_for_project(&self, project_id: ProjectId) -> ApiResult<Vec<Task>> {
        let rows: Vec<TaskRow> = self
            .transport
            .get(&format!("tasks/project/{project_id}"))
            .await?;
        rows.into_iter().map(Task::try_from).collect()
    }

    async fn create(&self, record: &NewTaskRecord) -> ApiResult<Task> {
        let details = &record.details;
        let body = CreateTaskBody {
            project_id: record.project_id,
            title: &details.title,
            description: &details.description,
            assignee: details.assignee.name(),
            assignee_avatar: details.assignee.avatar_url(),
            due_date: details.due_date,
            priority: details.priority.as_str(),
        };
        let row: TaskRow = self.transport.post("tasks", &body).await?;
        tracing::info!(task_id = %row.id, project_id = %row.project_id, "task created");
        Task::try_from(row)
    }

    async fn update(&self, id: TaskId, changes: &TaskChanges) -> ApiResult<Task> {
        let body = UpdateTaskBody::from(changes);
        let row: TaskRow = self.transport.put(&format!("tasks/{id}"), &body).await?;
        Task::try_from(row)
    }

    async fn delete(&self, id: TaskId) -> ApiResult<()> {
        self.transport.delete(&format!("tasks/{id}")).await?;
        tracing::info!(task_id = %id, "task deleted");
        Ok(())
    }
}
