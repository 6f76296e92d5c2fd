//! The three fixed board columns.

use crate::task::domain::{TaskId, TaskStatus};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a board column. Each column owns exactly one task status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(TaskStatus);

impl ColumnId {
    /// Prefix used when a column id is rendered as a board element id.
    pub const ELEMENT_PREFIX: &'static str = "column-";

    /// Every column in left-to-right order.
    pub const ALL: [Self; 3] = [
        Self(TaskStatus::NotStarted),
        Self(TaskStatus::InProgress),
        Self(TaskStatus::Done),
    ];

    /// Returns the column holding tasks with `status`.
    #[must_use]
    pub const fn for_status(status: TaskStatus) -> Self {
        Self(status)
    }

    /// Returns the status of tasks in this column.
    #[must_use]
    pub const fn status(self) -> TaskStatus {
        self.0
    }

    /// Returns the display title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        self.0.label()
    }

    /// Returns the element id, e.g. `column-in-progress`.
    #[must_use]
    pub fn element_id(self) -> String {
        format!(
            "{}{}",
            Self::ELEMENT_PREFIX,
            self.0.as_str().replace('_', "-")
        )
    }

    /// Parses an element id such as `column-done`.
    #[must_use]
    pub fn from_element_id(raw: &str) -> Option<Self> {
        let suffix = raw.strip_prefix(Self::ELEMENT_PREFIX)?;
        TaskStatus::try_from(suffix).ok().map(Self)
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.element_id())
    }
}

/// A column and the ordered ids of the tasks it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    id: ColumnId,
    task_ids: Vec<TaskId>,
}

impl Column {
    const fn new(id: ColumnId) -> Self {
        Self {
            id,
            task_ids: Vec::new(),
        }
    }

    /// Returns the column id.
    #[must_use]
    pub const fn id(&self) -> ColumnId {
        self.id
    }

    /// Returns the display title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.id.title()
    }

    /// Returns task ids top to bottom.
    #[must_use]
    pub fn task_ids(&self) -> &[TaskId] {
        &self.task_ids
    }

    /// Returns the index of `task_id` in this column.
    #[must_use]
    pub fn position(&self, task_id: TaskId) -> Option<usize> {
        self.task_ids.iter().position(|id| *id == task_id)
    }

    pub(crate) fn push(&mut self, task_id: TaskId) {
        self.task_ids.push(task_id);
    }

    /// Inserts at `index`, clamped to the column length.
    pub(crate) fn insert(&mut self, index: usize, task_id: TaskId) {
        let clamped = index.min(self.task_ids.len());
        self.task_ids.insert(clamped, task_id);
    }

    /// Removes `task_id`, returning the index it occupied.
    pub(crate) fn remove(&mut self, task_id: TaskId) -> Option<usize> {
        let index = self.position(task_id)?;
        self.task_ids.remove(index);
        Some(index)
    }
}

/// The three columns, one per status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSet {
    not_started: Column,
    in_progress: Column,
    done: Column,
}

impl Default for ColumnSet {
    fn default() -> Self {
        Self {
            not_started: Column::new(ColumnId(TaskStatus::NotStarted)),
            in_progress: Column::new(ColumnId(TaskStatus::InProgress)),
            done: Column::new(ColumnId(TaskStatus::Done)),
        }
    }
}

impl ColumnSet {
    /// Returns the column with `id`.
    #[must_use]
    pub const fn get(&self, id: ColumnId) -> &Column {
        match id.0 {
            TaskStatus::NotStarted => &self.not_started,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Done => &self.done,
        }
    }

    pub(crate) fn get_mut(&mut self, id: ColumnId) -> &mut Column {
        match id.0 {
            TaskStatus::NotStarted => &mut self.not_started,
            TaskStatus::InProgress => &mut self.in_progress,
            TaskStatus::Done => &mut self.done,
        }
    }

    /// Iterates over columns left to right.
    pub fn iter(&self) -> impl Iterator<Item = &Column> {
        [&self.not_started, &self.in_progress, &self.done].into_iter()
    }

    /// Finds the column and index holding `task_id`.
    #[must_use]
    pub fn locate(&self, task_id: TaskId) -> Option<(ColumnId, usize)> {
        self.iter()
            .find_map(|column| column.position(task_id).map(|index| (column.id, index)))
    }
}
