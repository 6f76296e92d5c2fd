//! In-memory task API.

use async_trait::async_trait;
use mockable::DefaultClock;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::persistence::{ApiError, ApiResult};
use crate::project::domain::ProjectId;
use crate::task::{
    domain::{Task, TaskDetails, TaskId},
    ports::{NewTaskRecord, TaskApi, TaskChanges},
};

/// Thread-safe in-memory task API.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskApi {
    state: Arc<RwLock<HashMap<TaskId, Task>>>,
}

impl InMemoryTaskApi {
    /// Creates an empty API.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored copy of a task.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unexpected`] when the state lock is poisoned.
    pub fn stored(&self, id: TaskId) -> ApiResult<Option<Task>> {
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

fn merged_details(task: &Task, changes: &TaskChanges) -> TaskDetails {
    TaskDetails {
        title: changes
            .title
            .clone()
            .unwrap_or_else(|| task.title().to_owned()),
        description: changes
            .description
            .clone()
            .unwrap_or_else(|| task.description().to_owned()),
        assignee: changes
            .assignee
            .clone()
            .unwrap_or_else(|| task.assignee().clone()),
        due_date: changes.due_date,
        priority: changes.priority.unwrap_or_else(|| task.priority()),
    }
}

#[async_trait]
impl TaskApi for InMemoryTaskApi {
    async fn list_for_project(&self, project_id: ProjectId) -> ApiResult<Vec<Task>> {
        let state = self.state.read().map_err(poisoned)?;
        let mut tasks: Vec<Task> = state
            .values()
            .filter(|task| task.project_id() == project_id)
            .cloned()
            .collect();
        tasks.sort_by_key(Task::created_at);
        Ok(tasks)
    }

    async fn create(&self, record: &NewTaskRecord) -> ApiResult<Task> {
        let task = Task::new(record.project_id, record.details.clone(), &DefaultClock);
        let mut state = self.state.write().map_err(poisoned)?;
        state.insert(task.id(), task.clone());
        Ok(task)
    }

    async fn update(&self, id: TaskId, changes: &TaskChanges) -> ApiResult<Task> {
        let mut state = self.state.write().map_err(poisoned)?;
        let task = state
            .get_mut(&id)
            .ok_or_else(|| ApiError::NotFound(format!("task {id}")))?;
        let details = merged_details(task, changes);
        task.apply_details(details, &DefaultClock);
        if let Some(status) = changes.status {
            task.change_status(status, &DefaultClock);
        }
        Ok(task.clone())
    }

    async fn delete(&self, id: TaskId) -> ApiResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| ApiError::NotFound(format!("task {id}")))
    }
}
