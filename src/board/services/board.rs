//! Board service: persisted mutations over the shared workspace.
//!
//! Creates, edits and deletes wait for the API and then update the
//! workspace. Cross-column moves are applied immediately and rolled back if
//! the API rejects them. The workspace lock is never held across an await.

use crate::auth::domain::UserId;
use crate::board::domain::{DropTarget, MoveOutcome, StatusChange, Workspace};
use crate::project::{
    domain::{Project, ProjectDomainError, ProjectId, ProjectStatus},
    ports::{NewProjectRecord, ProjectApi, ProjectChanges},
};
use crate::task::{
    domain::{Task, TaskDomainError, TaskDraft, TaskId},
    ports::{NewTaskRecord, TaskApi, TaskChanges},
};
use mockable::Clock;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{BoardError, BoardResult};

/// Board orchestration service for one signed-in user.
pub struct BoardService<T, P, C>
where
    T: TaskApi,
    P: ProjectApi,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    projects: Arc<P>,
    workspace: Arc<RwLock<Workspace<C>>>,
    owner: UserId,
}

impl<T, P, C> Clone for BoardService<T, P, C>
where
    T: TaskApi,
    P: ProjectApi,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            tasks: Arc::clone(&self.tasks),
            projects: Arc::clone(&self.projects),
            workspace: Arc::clone(&self.workspace),
            owner: self.owner,
        }
    }
}

impl<T, P, C> BoardService<T, P, C>
where
    T: TaskApi,
    P: ProjectApi,
    C: Clock + Send + Sync,
{
    /// Creates a service with an empty workspace.
    #[must_use]
    pub fn new(tasks: Arc<T>, projects: Arc<P>, clock: C, owner: UserId) -> Self {
        Self {
            tasks,
            projects,
            workspace: Arc::new(RwLock::new(Workspace::new(clock))),
            owner,
        }
    }

    /// Returns the signed-in user.
    #[must_use]
    pub const fn owner(&self) -> UserId {
        self.owner
    }

    /// Runs `read` against the current workspace.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::StateUnavailable`] when the lock is poisoned.
    pub fn read<R>(&self, read: impl FnOnce(&Workspace<C>) -> R) -> BoardResult<R> {
        Ok(read(&*self.read_guard()?))
    }

    /// Loads the user's projects.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Api`] when listing fails.
    pub async fn load_projects(&self) -> BoardResult<()> {
        let projects = self.projects.list(self.owner).await?;
        tracing::debug!(count = projects.len(), "projects loaded");
        self.write_guard()?.load_projects(projects);
        Ok(())
    }

    /// Creates a project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyName`] for a blank name, or
    /// [`BoardError::Api`] when creation fails.
    pub async fn create_project(&self, name: &str, description: &str) -> BoardResult<Project> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ProjectDomainError::EmptyName.into());
        }
        let record = NewProjectRecord {
            owner: self.owner,
            name: trimmed.to_owned(),
            description: description.trim().to_owned(),
        };
        let project = self.projects.create(&record).await?;
        tracing::info!(project_id = %project.id(), "project created");
        self.write_guard()?.upsert_project(project.clone());
        Ok(project)
    }

    /// Renames and/or re-describes a project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError`] for a blank name or unknown project, or
    /// [`BoardError::Api`] when the update fails.
    pub async fn update_project(
        &self,
        id: ProjectId,
        name: Option<&str>,
        description: Option<&str>,
    ) -> BoardResult<Project> {
        self.ensure_project(id)?;
        let mut changes = ProjectChanges::new(self.owner);
        if let Some(new_name) = name {
            let trimmed = new_name.trim();
            if trimmed.is_empty() {
                return Err(ProjectDomainError::EmptyName.into());
            }
            changes = changes.with_name(trimmed);
        }
        if let Some(new_description) = description {
            changes = changes.with_description(new_description.trim());
        }
        let project = self.projects.update(id, &changes).await?;
        self.write_guard()?.upsert_project(project.clone());
        Ok(project)
    }

    /// Marks a project done regardless of its tasks.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::NotFound`] for an unknown project, or
    /// [`BoardError::Api`] after restoring the previous status.
    pub async fn complete_project(&self, id: ProjectId) -> BoardResult<()> {
        let snapshot = self.write_guard()?.complete_project(id)?;
        let changes = ProjectChanges::new(self.owner).with_status(ProjectStatus::Done);
        match self.projects.update(id, &changes).await {
            Ok(project) => {
                tracing::info!(project_id = %id, "project completed");
                self.write_guard()?.upsert_project(project);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(
                    project_id = %id,
                    error = %err,
                    "completion rejected, restoring status"
                );
                self.write_guard()?.restore_project(snapshot);
                Err(err.into())
            }
        }
    }

    /// Deletes a project and drops its tasks.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::NotFound`] for an unknown project, or
    /// [`BoardError::Api`] when deletion fails.
    pub async fn delete_project(&self, id: ProjectId) -> BoardResult<()> {
        self.ensure_project(id)?;
        self.projects.delete(id, self.owner).await?;
        tracing::info!(project_id = %id, "project deleted");
        self.write_guard()?.remove_project(id)?;
        Ok(())
    }

    /// Selects a project and loads its tasks.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::NotFound`] for an unknown project, or
    /// [`BoardError::Api`] when loading tasks fails.
    pub async fn select_project(&self, id: ProjectId) -> BoardResult<()> {
        self.write_guard()?.select_project(id)?;
        let tasks = self.tasks.list_for_project(id).await?;
        tracing::debug!(project_id = %id, count = tasks.len(), "tasks loaded");
        self.write_guard()?.hydrate_project(id, tasks);
        Ok(())
    }

    /// Validates and persists a new task in the selected project.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NoProjectSelected`], a [`TaskDomainError`] for
    /// invalid input, or [`BoardError::Api`] when creation fails.
    pub async fn add_task(&self, draft: TaskDraft) -> BoardResult<Task> {
        let project_id = self
            .read_guard()?
            .projects()
            .selected_id()
            .ok_or(BoardError::NoProjectSelected)?;
        let details = draft.validate_for_create()?;
        let task = self
            .tasks
            .create(&NewTaskRecord {
                project_id,
                details,
            })
            .await?;
        self.write_guard()?.insert_task(task.clone());
        self.persist_status_changes().await?;
        Ok(task)
    }

    /// Validates and persists edits to a task.
    ///
    /// A response for a task deleted in the meantime is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NotFound`] for an unknown task, a
    /// validation error, or [`BoardError::Api`] when the update fails.
    pub async fn update_task(&self, id: TaskId, draft: TaskDraft) -> BoardResult<Task> {
        self.ensure_task(id)?;
        let details = draft.validate_for_update()?;
        let task = self.tasks.update(id, &TaskChanges::from(details)).await?;
        if !self.write_guard()?.reconcile_task(task.clone()) {
            tracing::debug!(task_id = %id, "update response for deleted task ignored");
        }
        Ok(task)
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NotFound`] for an unknown task or
    /// [`BoardError::Api`] when deletion fails.
    pub async fn delete_task(&self, id: TaskId) -> BoardResult<()> {
        self.ensure_task(id)?;
        self.tasks.delete(id).await?;
        tracing::info!(task_id = %id, "task deleted");
        match self.write_guard()?.delete_task(id) {
            Ok(_) | Err(TaskDomainError::NotFound(_)) => {}
            Err(err) => return Err(err.into()),
        }
        self.persist_status_changes().await
    }

    /// Applies a drop and persists a resulting status change.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Api`] after rolling the move back when the API
    /// rejects it.
    pub async fn move_task(&self, active: TaskId, target: DropTarget) -> BoardResult<MoveOutcome> {
        let outcome = self.write_guard()?.move_task(active, target);
        let record = match &outcome {
            MoveOutcome::Moved(record) => record.clone(),
            MoveOutcome::Ignored(reason) => {
                tracing::debug!(task_id = %active, ?reason, "drop ignored");
                return Ok(outcome);
            }
            MoveOutcome::Reordered { .. } => return Ok(outcome),
        };

        let changes = TaskChanges::status(record.new_status());
        match self.tasks.update(active, &changes).await {
            Ok(task) => {
                tracing::info!(task_id = %active, status = %record.new_status(), "task moved");
                if !self.write_guard()?.reconcile_task(task) {
                    tracing::debug!(task_id = %active, "move response for deleted task ignored");
                }
                self.persist_status_changes().await?;
                Ok(outcome)
            }
            Err(err) => {
                tracing::warn!(task_id = %active, error = %err, "move rejected, rolling back");
                let mut workspace = self.write_guard()?;
                workspace.revert_move(&record);
                workspace.take_status_changes();
                drop(workspace);
                Err(err.into())
            }
        }
    }

    /// Applies a drop given the raw element id under the pointer.
    ///
    /// # Errors
    ///
    /// See [`BoardService::move_task`].
    pub async fn move_task_to_element(
        &self,
        active: TaskId,
        element_id: Option<&str>,
    ) -> BoardResult<MoveOutcome> {
        self.move_task(active, DropTarget::classify(element_id)).await
    }

    /// Sets or clears the selected task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::StateUnavailable`] when the lock is poisoned.
    pub fn select_task(&self, id: Option<TaskId>) -> BoardResult<()> {
        self.write_guard()?.select_task(id);
        Ok(())
    }

    async fn persist_status_changes(&self) -> BoardResult<()> {
        let changes: Vec<StatusChange> = self.write_guard()?.take_status_changes();
        for change in changes {
            let update = ProjectChanges::new(self.owner).with_status(change.status);
            match self.projects.update(change.project_id, &update).await {
                Ok(_) => tracing::debug!(
                    project_id = %change.project_id,
                    status = %change.status,
                    "derived project status saved"
                ),
                Err(err) => tracing::warn!(
                    project_id = %change.project_id,
                    error = %err,
                    "derived project status not saved"
                ),
            }
        }
        Ok(())
    }

    fn ensure_project(&self, id: ProjectId) -> BoardResult<()> {
        if self.read_guard()?.projects().get(id).is_none() {
            return Err(ProjectDomainError::NotFound(id).into());
        }
        Ok(())
    }

    fn ensure_task(&self, id: TaskId) -> BoardResult<()> {
        if self.read_guard()?.store().get(id).is_none() {
            return Err(TaskDomainError::NotFound(id).into());
        }
        Ok(())
    }

    fn read_guard(&self) -> BoardResult<RwLockReadGuard<'_, Workspace<C>>> {
        self.workspace
            .read()
            .map_err(|err| BoardError::StateUnavailable(err.to_string()))
    }

    fn write_guard(&self) -> BoardResult<RwLockWriteGuard<'_, Workspace<C>>> {
        self.workspace
            .write()
            .map_err(|err| BoardError::StateUnavailable(err.to_string()))
    }
}
