//! Persistence API port for projects.
//!
//! Every call is scoped by the owning user; implementations reject calls for
//! projects the caller does not own with [`ApiError::Authorization`].
//!
//! [`ApiError::Authorization`]: crate::persistence::ApiError::Authorization

use crate::auth::domain::UserId;
use crate::persistence::ApiResult;
use crate::project::domain::{Project, ProjectId, ProjectStatus};
use async_trait::async_trait;

/// Project persistence contract.
#[async_trait]
pub trait ProjectApi: Send + Sync {
    /// Lists the projects owned by `owner`, newest first.
    async fn list(&self, owner: UserId) -> ApiResult<Vec<Project>>;

    /// Creates a not-started project.
    async fn create(&self, record: &NewProjectRecord) -> ApiResult<Project>;

    /// Applies a partial update to an owned project.
    ///
    /// # Errors
    ///
    /// Returns [`crate::persistence::ApiError::NotFound`] when the project
    /// does not exist.
    async fn update(&self, id: ProjectId, changes: &ProjectChanges) -> ApiResult<Project>;

    /// Deletes an owned project.
    async fn delete(&self, id: ProjectId, owner: UserId) -> ApiResult<()>;
}

/// Payload for creating a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProjectRecord {
    /// Owning user.
    pub owner: UserId,
    /// Validated, trimmed name.
    pub name: String,
    /// Description.
    pub description: String,
}

/// Partial project update; `None` fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectChanges {
    /// Caller identity; must own the project.
    pub owner: UserId,
    /// New name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New status.
    pub status: Option<ProjectStatus>,
}

impl ProjectChanges {
    /// Creates an empty change set for `owner`.
    #[must_use]
    pub const fn new(owner: UserId) -> Self {
        Self {
            owner,
            name: None,
            description: None,
            status: None,
        }
    }

    /// Sets the new name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the new description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the new status.
    #[must_use]
    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = Some(status);
        self
    }
}
