//! Wire models for the project REST endpoints.

use crate::auth::domain::UserId;
use crate::project::domain::{
    ParseProjectStatusError, PersistedProjectData, Project, ProjectId, ProjectStatus,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Project as returned by the API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ProjectRow {
    pub id: ProjectId,
    pub user_id: UserId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<ProjectRow> for Project {
    type Error = ParseProjectStatusError;

    fn try_from(row: ProjectRow) -> Result<Self, Self::Error> {
        let status = ProjectStatus::try_from(row.status.as_str())?;
        Ok(Self::from_persisted(PersistedProjectData {
            id: row.id,
            owner: row.user_id,
            name: row.name,
            description: row.description,
            status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }))
    }
}

/// `POST /projects` body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CreateProjectBody<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub user_id: UserId,
}

/// `PUT /projects/:id` body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct UpdateProjectBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<&'static str>,
    pub user_id: UserId,
}
