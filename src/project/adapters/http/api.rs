//! [`ProjectApi`] over the REST endpoints.

use async_trait::async_trait;

use super::models::{CreateProjectBody, ProjectRow, UpdateProjectBody};
use crate::auth::domain::UserId;
use crate::persistence::{ApiError, ApiResult, ApiTransport};
use crate::project::{
    domain::{Project, ProjectId},
    ports::{NewProjectRecord, ProjectApi, ProjectChanges},
};

/// REST client for `/projects`.
#[derive(Clone)]
pub struct HttpProjectApi {
    transport: ApiTransport,
}

impl HttpProjectApi {
    /// Creates a client over an authenticated transport.
    #[must_use]
    pub const fn new(transport: ApiTransport) -> Self {
        Self { transport }
    }
}

fn into_project(row: ProjectRow) -> ApiResult<Project> {
    Project::try_from(row).map_err(|err| ApiError::Decode(err.to_string()))
}

#[async_trait]
impl ProjectApi for HttpProjectApi {
    async fn list(&self, owner: UserId) -> ApiResult<Vec<Project>> {
        let rows: Vec<ProjectRow> = self
            .transport
            .get(&format!("projects?userId={owner}"))
            .await?;
        rows.into_iter().map(into_project).collect()
    }

    async fn create(&self, record: &NewProjectRecord) -> ApiResult<Project> {
        let body = CreateProjectBody {
            name: &record.name,
            description: &record.description,
            user_id: record.owner,
        };
        let row: ProjectRow = self.transport.post("projects", &body).await?;
        tracing::info!(project_id = %row.id, "project created");
        into_project(row)
    }

    async fn update(&self, id: ProjectId, changes: &ProjectChanges) -> ApiResult<Project> {
        let body = UpdateProjectBody {
            name: changes.name.as_deref(),
            description: changes.description.as_deref(),
            status: changes.status.map(|status| status.as_str()),
            user_id: changes.owner,
        };
        let row: ProjectRow = self.transport.put(&format!("projects/{id}"), &body).await?;
        into_project(row)
    }

    async fn delete(&self, id: ProjectId, owner: UserId) -> ApiResult<()> {
        self.transport
            .delete(&format!("projects/{id}?userId={owner}"))
            .await?;
        tracing::info!(project_id = %id, "project deleted");
        Ok(())
    }
}
