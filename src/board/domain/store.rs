//! Task map, column membership and selection.
//!
//! The store is the only place where a task's status and its column change,
//! and it changes both together. Every mutation leaves each stored task in
//! exactly one column whose status matches the task's.

use super::{ColumnId, ColumnSet, ConsistencyError, DropTarget};
use crate::project::domain::ProjectId;
use crate::task::domain::{Task, TaskDomainError, TaskDraft, TaskId, TaskStatus};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::collections::{HashMap, HashSet};

/// Position of a task on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Column holding the task.
    pub column: ColumnId,
    /// Index within the column.
    pub index: usize,
}

/// A cross-column move, kept so that a rejected move can be reverted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    /// Moved task.
    pub task_id: TaskId,
    /// Owning project.
    pub project_id: ProjectId,
    /// Where the task was before the move.
    pub from: Placement,
    /// Where the task is now.
    pub to: Placement,
    /// The task's `updated_at` before the move.
    pub previous_updated_at: DateTime<Utc>,
}

impl MoveRecord {
    /// Returns the status the task now has.
    #[must_use]
    pub const fn new_status(&self) -> TaskStatus {
        self.to.column.status()
    }
}

/// Why a drop did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredMove {
    /// The drag ended over nothing recognisable.
    NoTarget,
    /// The dragged task is not in the store.
    UnknownTask(TaskId),
    /// The anchor task is not in the store or belongs to another project.
    UnknownAnchor(TaskId),
    /// The task was dropped on itself.
    SelfDrop,
    /// The task was dropped on its own column.
    SameColumn,
}

/// Result of [`TaskStore::move_task`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Nothing changed.
    Ignored(IgnoredMove),
    /// The task moved within its column; status is unchanged.
    Reordered {
        /// Moved task.
        task_id: TaskId,
        /// Column holding it.
        column: ColumnId,
        /// Index before the move.
        from_index: usize,
        /// Index after the move.
        to_index: usize,
    },
    /// The task moved to another column and took its status.
    Moved(MoveRecord),
}

/// Tasks keyed by id, the three columns and the selected task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: HashMap<TaskId, Task>,
    columns: ColumnSet,
    selected: Option<TaskId>,
}

impl TaskStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the columns.
    #[must_use]
    pub const fn columns(&self) -> &ColumnSet {
        &self.columns
    }

    /// Looks up a task.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(&id)
    }

    /// Returns the number of stored tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns whether the store holds no task.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Iterates over the tasks of `project_id` in `column`, top to bottom.
    pub fn tasks_in(&self, column: ColumnId, project_id: ProjectId) -> impl Iterator<Item = &Task> {
        self.columns
            .get(column)
            .task_ids()
            .iter()
            .filter_map(move |id| self.tasks.get(id))
            .filter(move |task| task.project_id() == project_id)
    }

    /// Returns the statuses of every task in `project_id`.
    pub fn project_statuses(&self, project_id: ProjectId) -> impl Iterator<Item = TaskStatus> {
        self.tasks
            .values()
            .filter(move |task| task.project_id() == project_id)
            .map(Task::status)
    }

    /// Validates a draft and adds a not-started task at the bottom of the
    /// not-started column.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::Validation`] naming every empty required
    /// field, or [`TaskDomainError::InvalidPriority`].
    pub fn add_task(
        &mut self,
        project_id: ProjectId,
        draft: TaskDraft,
        clock: &impl Clock,
    ) -> Result<Task, TaskDomainError> {
        let details = draft.validate_for_create()?;
        let task = Task::new(project_id, details, clock);
        self.insert_task(task.clone());
        Ok(task)
    }

    /// Edits a task's details. Status and column membership are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NotFound`] for an unknown id, then any
    /// validation error of [`TaskDraft::validate_for_update`].
    pub fn update_task(
        &mut self,
        id: TaskId,
        draft: TaskDraft,
        clock: &impl Clock,
    ) -> Result<Task, TaskDomainError> {
        let task = self.tasks.get_mut(&id).ok_or(TaskDomainError::NotFound(id))?;
        let details = draft.validate_for_update()?;
        task.apply_details(details, clock);
        Ok(task.clone())
    }

    /// Removes a task from the map and its column, clearing the selection if
    /// it pointed at the task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NotFound`] for an unknown id.
    pub fn delete_task(&mut self, id: TaskId) -> Result<Task, TaskDomainError> {
        let task = self.tasks.remove(&id).ok_or(TaskDomainError::NotFound(id))?;
        self.columns
            .get_mut(ColumnId::for_status(task.status()))
            .remove(id);
        if self.selected == Some(id) {
            self.selected = None;
        }
        self.debug_check();
        Ok(task)
    }

    /// Applies a drop of `active` onto `target`.
    ///
    /// Dropping on another column appends the task there. Dropping on a card
    /// in the same column reorders; dropping on a card in another column
    /// inserts the task at that card's index. Unactionable drops change
    /// nothing and are reported as [`MoveOutcome::Ignored`].
    pub fn move_task(
        &mut self,
        active: TaskId,
        target: DropTarget,
        clock: &impl Clock,
    ) -> MoveOutcome {
        let Some(project_id) = self.tasks.get(&active).map(Task::project_id) else {
            return MoveOutcome::Ignored(IgnoredMove::UnknownTask(active));
        };
        let Some((source, from_index)) = self.columns.locate(active) else {
            return MoveOutcome::Ignored(IgnoredMove::UnknownTask(active));
        };

        let (target_column, target_index) = match target {
            DropTarget::Nothing => return MoveOutcome::Ignored(IgnoredMove::NoTarget),
            DropTarget::Column(column) if column == source => {
                return MoveOutcome::Ignored(IgnoredMove::SameColumn);
            }
            DropTarget::Column(column) => (column, None),
            DropTarget::Task(anchor) if anchor == active => {
                return MoveOutcome::Ignored(IgnoredMove::SelfDrop);
            }
            DropTarget::Task(anchor) => {
                let anchored = self
                    .tasks
                    .get(&anchor)
                    .filter(|task| task.project_id() == project_id)
                    .and_then(|_| self.columns.locate(anchor));
                let Some((column, index)) = anchored else {
                    return MoveOutcome::Ignored(IgnoredMove::UnknownAnchor(anchor));
                };
                (column, Some(index))
            }
        };

        if target_column == source {
            let to_index = target_index.unwrap_or(from_index);
            let column = self.columns.get_mut(source);
            column.remove(active);
            column.insert(to_index, active);
            self.debug_check();
            return MoveOutcome::Reordered {
                task_id: active,
                column: source,
                from_index,
                to_index,
            };
        }

        let Some(task) = self.tasks.get_mut(&active) else {
            return MoveOutcome::Ignored(IgnoredMove::UnknownTask(active));
        };
        let previous_updated_at = task.updated_at();
        task.change_status(target_column.status(), clock);

        self.columns.get_mut(source).remove(active);
        let destination = self.columns.get_mut(target_column);
        let to_index = target_index.unwrap_or(destination.task_ids().len());
        destination.insert(to_index, active);
        self.debug_check();

        MoveOutcome::Moved(MoveRecord {
            task_id: active,
            project_id,
            from: Placement {
                column: source,
                index: from_index,
            },
            to: Placement {
                column: target_column,
                index: to_index,
            },
            previous_updated_at,
        })
    }

    /// Sets or clears the selected task. The id is not validated.
    pub const fn select_task(&mut self, id: Option<TaskId>) {
        self.selected = id;
    }

    /// Returns the selected task id.
    #[must_use]
    pub const fn selected_id(&self) -> Option<TaskId> {
        self.selected
    }

    /// Returns the selected task, if it still exists.
    #[must_use]
    pub fn selected_task(&self) -> Option<&Task> {
        self.selected.and_then(|id| self.tasks.get(&id))
    }

    /// Counts the tasks of `project_id` that are not done.
    #[must_use]
    pub fn incomplete_task_count(&self, project_id: ProjectId) -> usize {
        self.project_statuses(project_id)
            .filter(|status| status.is_incomplete())
            .count()
    }

    /// Places a task in the column implied by its status, replacing any
    /// stored task with the same id.
    pub fn insert_task(&mut self, task: Task) {
        let id = task.id();
        if let Some(previous) = self.tasks.remove(&id) {
            self.columns
                .get_mut(ColumnId::for_status(previous.status()))
                .remove(id);
        }
        self.columns
            .get_mut(ColumnId::for_status(task.status()))
            .push(id);
        self.tasks.insert(id, task);
        self.debug_check();
    }

    /// Applies a server copy of an existing task.
    ///
    /// Returns `false` without changing anything when the task is no longer
    /// stored. A task keeps its position unless its status changed, in which
    /// case it moves to the bottom of its new column.
    pub fn reconcile_task(&mut self, task: Task) -> bool {
        let id = task.id();
        let Some(current) = self.tasks.get_mut(&id) else {
            return false;
        };
        let previous_status = current.status();
        let new_status = task.status();
        *current = task;
        if previous_status != new_status {
            self.columns
                .get_mut(ColumnId::for_status(previous_status))
                .remove(id);
            self.columns
                .get_mut(ColumnId::for_status(new_status))
                .push(id);
        }
        self.debug_check();
        true
    }

    /// Puts a moved task back where it was before `record`'s move.
    ///
    /// Returns `false` when the task no longer exists.
    pub fn revert_move(&mut self, record: &MoveRecord) -> bool {
        let Some(task) = self.tasks.get_mut(&record.task_id) else {
            return false;
        };
        let current = ColumnId::for_status(task.status());
        task.restore_status(record.from.column.status(), record.previous_updated_at);
        self.columns.get_mut(current).remove(record.task_id);
        self.columns
            .get_mut(record.from.column)
            .insert(record.from.index, record.task_id);
        self.debug_check();
        true
    }

    /// Replaces every task of `project_id` with `tasks`, oldest first within
    /// each column.
    pub fn replace_project_tasks(&mut self, project_id: ProjectId, mut tasks: Vec<Task>) {
        self.remove_project_tasks(project_id);
        tasks.sort_by_key(Task::created_at);
        for task in tasks.into_iter().filter(|task| task.project_id() == project_id) {
            self.insert_task(task);
        }
    }

    /// Drops every task of `project_id`.
    pub fn remove_project_tasks(&mut self, project_id: ProjectId) {
        let doomed: Vec<(TaskId, TaskStatus)> = self
            .tasks
            .values()
            .filter(|task| task.project_id() == project_id)
            .map(|task| (task.id(), task.status()))
            .collect();
        for (id, status) in doomed {
            self.tasks.remove(&id);
            self.columns.get_mut(ColumnId::for_status(status)).remove(id);
            if self.selected == Some(id) {
                self.selected = None;
            }
        }
        self.debug_check();
    }

    /// Checks that every stored task sits in exactly one column and that the
    /// column matches its status.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConsistencyError`] found.
    pub fn verify_consistency(&self) -> Result<(), ConsistencyError> {
        let mut seen = HashSet::with_capacity(self.tasks.len());
        for column in self.columns.iter() {
            for task_id in column.task_ids().iter().copied() {
                let task = self.tasks.get(&task_id).ok_or(ConsistencyError::Orphan {
                    column: column.id(),
                    task_id,
                })?;
                if !seen.insert(task_id) {
                    return Err(ConsistencyError::Duplicate(task_id));
                }
                if task.status() != column.id().status() {
                    return Err(ConsistencyError::StatusMismatch {
                        task_id,
                        status: task.status(),
                        column: column.id(),
                    });
                }
            }
        }
        match self.tasks.keys().find(|id| !seen.contains(*id)) {
            Some(id) => Err(ConsistencyError::Unplaced(*id)),
            None => Ok(()),
        }
    }

    fn debug_check(&self) {
        debug_assert_eq!(self.verify_consistency(), Ok(()));
    }
}
