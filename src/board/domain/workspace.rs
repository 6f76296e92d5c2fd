//! Per-session board state.
//!
//! The workspace owns the task store, the loaded projects and the clock.
//! Task mutations that can change a project's status re-derive it in the
//! same call and queue a [`StatusChange`] for the caller to persist.

use super::{DropTarget, MoveOutcome, MoveRecord, TaskStore};
use crate::project::domain::{
    Project, ProjectDomainError, ProjectId, ProjectRegistry, ProjectStatus, derive_status,
};
use crate::task::domain::{Task, TaskDomainError, TaskDraft, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// A project status that changed by derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChange {
    /// Affected project.
    pub project_id: ProjectId,
    /// Newly derived status.
    pub status: ProjectStatus,
}

/// A project's status before an optimistic change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectSnapshot {
    /// Snapshotted project.
    pub project_id: ProjectId,
    /// Status before the change.
    pub status: ProjectStatus,
    /// `updated_at` before the change.
    pub updated_at: DateTime<Utc>,
}

/// Task store plus project registry for one signed-in session.
#[derive(Debug)]
pub struct Workspace<C> {
    store: TaskStore,
    projects: ProjectRegistry,
    pending: Vec<StatusChange>,
    clock: C,
}

impl<C: Clock> Workspace<C> {
    /// Creates an empty workspace.
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self {
            store: TaskStore::new(),
            projects: ProjectRegistry::new(),
            pending: Vec::new(),
            clock,
        }
    }

    /// Returns the task store.
    #[must_use]
    pub const fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Returns the loaded projects.
    #[must_use]
    pub const fn projects(&self) -> &ProjectRegistry {
        &self.projects
    }

    /// Drains the queued derived status changes.
    pub fn take_status_changes(&mut self) -> Vec<StatusChange> {
        std::mem::take(&mut self.pending)
    }

    /// Replaces the loaded projects, dropping tasks of projects that are
    /// gone.
    pub fn load_projects(&mut self, projects: Vec<Project>) {
        let vanished: Vec<ProjectId> = self
            .projects
            .iter()
            .map(Project::id)
            .filter(|id| projects.iter().all(|project| project.id() != *id))
            .collect();
        for id in vanished {
            self.store.remove_project_tasks(id);
        }
        self.projects.replace_all(projects);
    }

    /// Inserts or replaces a project.
    pub fn upsert_project(&mut self, project: Project) {
        self.projects.upsert(project);
    }

    /// Removes a project and every one of its tasks.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::NotFound`] for an unknown project.
    pub fn remove_project(&mut self, id: ProjectId) -> Result<Project, ProjectDomainError> {
        let project = self.projects.remove(id)?;
        self.store.remove_project_tasks(id);
        Ok(project)
    }

    /// Selects a project and clears the task selection.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::NotFound`] for an unknown project.
    pub fn select_project(&mut self, id: ProjectId) -> Result<(), ProjectDomainError> {
        self.projects.select(id)?;
        self.store.select_task(None);
        Ok(())
    }

    /// Replaces a project's tasks with a freshly loaded set. The project's
    /// persisted status is kept.
    pub fn hydrate_project(&mut self, id: ProjectId, tasks: Vec<Task>) {
        self.store.replace_project_tasks(id, tasks);
    }

    /// Force-completes a project, returning its prior state.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::NotFound`] for an unknown project.
    pub fn complete_project(
        &mut self,
        id: ProjectId,
    ) -> Result<ProjectSnapshot, ProjectDomainError> {
        let project = self
            .projects
            .get_mut(id)
            .ok_or(ProjectDomainError::NotFound(id))?;
        let snapshot = ProjectSnapshot {
            project_id: id,
            status: project.status(),
            updated_at: project.updated_at(),
        };
        project.complete(&self.clock);
        Ok(snapshot)
    }

    /// Restores a project's status from a snapshot. Unknown projects are
    /// ignored.
    pub fn restore_project(&mut self, snapshot: ProjectSnapshot) {
        if let Some(project) = self.projects.get_mut(snapshot.project_id) {
            project.restore_status(snapshot.status, snapshot.updated_at);
        }
    }

    /// Adds a task locally from a draft.
    ///
    /// # Errors
    ///
    /// Returns the draft's validation error.
    pub fn add_task(
        &mut self,
        project_id: ProjectId,
        draft: TaskDraft,
    ) -> Result<Task, TaskDomainError> {
        let task = self.store.add_task(project_id, draft, &self.clock)?;
        self.refresh_project_status(project_id);
        Ok(task)
    }

    /// Places a server-confirmed task.
    pub fn insert_task(&mut self, task: Task) {
        let project_id = task.project_id();
        self.store.insert_task(task);
        self.refresh_project_status(project_id);
    }

    /// Edits a task's details without touching its status.
    ///
    /// # Errors
    ///
    /// See [`TaskStore::update_task`].
    pub fn update_task(&mut self, id: TaskId, draft: TaskDraft) -> Result<Task, TaskDomainError> {
        self.store.update_task(id, draft, &self.clock)
    }

    /// Applies a server copy of a task. Returns `false` for a task that has
    /// vanished in the meantime.
    pub fn reconcile_task(&mut self, task: Task) -> bool {
        let project_id = task.project_id();
        let status_changed = self
            .store
            .get(task.id())
            .is_some_and(|current| current.status() != task.status());
        let applied = self.store.reconcile_task(task);
        if status_changed {
            self.refresh_project_status(project_id);
        }
        applied
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NotFound`] for an unknown id.
    pub fn delete_task(&mut self, id: TaskId) -> Result<Task, TaskDomainError> {
        let task = self.store.delete_task(id)?;
        self.refresh_project_status(task.project_id());
        Ok(task)
    }

    /// Applies a drop; see [`TaskStore::move_task`].
    pub fn move_task(&mut self, active: TaskId, target: DropTarget) -> MoveOutcome {
        let outcome = self.store.move_task(active, target, &self.clock);
        if let MoveOutcome::Moved(record) = &outcome {
            self.refresh_project_status(record.project_id);
        }
        outcome
    }

    /// Undoes a cross-column move.
    pub fn revert_move(&mut self, record: &MoveRecord) {
        if self.store.revert_move(record) {
            self.refresh_project_status(record.project_id);
        }
    }

    /// Sets or clears the selected task.
    pub fn select_task(&mut self, id: Option<TaskId>) {
        self.store.select_task(id);
    }

    /// Counts the not-done tasks of a project.
    #[must_use]
    pub fn incomplete_task_count(&self, project_id: ProjectId) -> usize {
        self.store.incomplete_task_count(project_id)
    }

    fn refresh_project_status(&mut self, project_id: ProjectId) {
        let status = derive_status(self.store.project_statuses(project_id));
        let Some(project) = self.projects.get_mut(project_id) else {
            return;
        };
        if project.apply_derived_status(status, &self.clock) {
            self.pending.push(StatusChange { project_id, status });
        }
    }
}
