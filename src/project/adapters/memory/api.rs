//! In-memory project API for tests and offline tooling.

use async_trait::async_trait;
use mockable::DefaultClock;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::auth::domain::UserId;
use crate::persistence::{ApiError, ApiResult};
use crate::project::{
    domain::{Project, ProjectId, ProjectStatus},
    ports::{NewProjectRecord, ProjectApi, ProjectChanges},
};

/// Thread-safe in-memory project API enforcing ownership like the REST
/// backend does.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectApi {
    state: Arc<RwLock<HashMap<ProjectId, Project>>>,
}

impl InMemoryProjectApi {
    /// Creates an empty API.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored copy of a project, bypassing ownership checks.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unexpected`] when the state lock is poisoned.
    pub fn stored(&self, id: ProjectId) -> ApiResult<Option<Project>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.get(&id).cloned())
    }
}

fn poisoned(err: impl std::fmt::Display) -> ApiError {
    ApiError::Unexpected {
        status: 500,
        body: err.to_string(),
    }
}

fn owned_mut(
    state: &mut HashMap<ProjectId, Project>,
    id: ProjectId,
    owner: UserId,
) -> ApiResult<&mut Project> {
    let project = state
        .get_mut(&id)
        .ok_or_else(|| ApiError::NotFound(format!("project {id}")))?;
    if project.owner() != owner {
        return Err(ApiError::Authorization { status: 403 });
    }
    Ok(project)
}

#[async_trait]
impl ProjectApi for InMemoryProjectApi {
    async fn list(&self, owner: UserId) -> ApiResult<Vec<Project>> {
        let state = self.state.read().map_err(poisoned)?;
        let mut projects: Vec<Project> = state
            .values()
            .filter(|project| project.owner() == owner)
            .cloned()
            .collect();
        projects.sort_by_key(|project| std::cmp::Reverse(project.created_at()));
        Ok(projects)
    }

    async fn create(&self, record: &NewProjectRecord) -> ApiResult<Project> {
        let project = Project::new(record.owner, &record.name, &record.description, &DefaultClock)
            .map_err(|err| ApiError::Unexpected {
                status: 400,
                body: err.to_string(),
            })?;
        let mut state = self.state.write().map_err(poisoned)?;
        state.insert(project.id(), project.clone());
        Ok(project)
    }

    async fn update(&self, id: ProjectId, changes: &ProjectChanges) -> ApiResult<Project> {
        let mut state = self.state.write().map_err(poisoned)?;
        let project = owned_mut(&mut state, id, changes.owner)?;
        project
            .update(
                changes.name.as_deref(),
                changes.description.as_deref(),
                &DefaultClock,
            )
            .map_err(|err| ApiError::Unexpected {
                status: 400,
                body: err.to_string(),
            })?;
        match changes.status {
            Some(ProjectStatus::Done) => project.complete(&DefaultClock),
            Some(status) => {
                project.apply_derived_status(status, &DefaultClock);
            }
            None => {}
        }
        Ok(project.clone())
    }

    async fn delete(&self, id: ProjectId, owner: UserId) -> ApiResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        owned_mut(&mut state, id, owner)?;
        state.remove(&id);
        Ok(())
    }
}
