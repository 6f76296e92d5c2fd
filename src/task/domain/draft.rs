//! Unvalidated task form input and its validated counterpart.

use super::{TaskDomainError, TaskPriority};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Required free-text fields of a task form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskField {
    /// Task title.
    Title,
    /// Task description.
    Description,
    /// Assignee display name.
    Assignee,
}

impl TaskField {
    /// Returns the field name as used in form errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Assignee => "assignee",
        }
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Non-empty list of fields that failed validation, in form order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MissingFields(Vec<TaskField>);

impl MissingFields {
    /// Returns whether `field` is among the missing fields.
    #[must_use]
    pub fn contains(&self, field: TaskField) -> bool {
        self.0.contains(&field)
    }

    /// Returns the missing fields.
    #[must_use]
    pub fn fields(&self) -> &[TaskField] {
        &self.0
    }
}

impl fmt::Display for MissingFields {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(|field| field.as_str()).collect();
        formatter.write_str(&names.join(", "))
    }
}

/// Person a task is assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    name: String,
    avatar_url: Option<String>,
}

impl Assignee {
    /// Creates an assignee from a display name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            avatar_url: None,
        }
    }

    /// Sets the avatar reference.
    #[must_use]
    pub fn with_avatar(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the avatar reference, if any.
    #[must_use]
    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar_url.as_deref()
    }
}

/// Raw task form input as submitted by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: String,
    description: String,
    assignee: String,
    avatar_url: Option<String>,
    due_date: Option<DateTime<Utc>>,
    priority: String,
}

impl TaskDraft {
    /// Creates a draft with the free-text fields and the raw priority value.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        assignee: impl Into<String>,
        priority: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            assignee: assignee.into(),
            avatar_url: None,
            due_date: None,
            priority: priority.into(),
        }
    }

    /// Sets the due date. Unset due dates default to the creation time.
    #[must_use]
    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the assignee avatar reference.
    #[must_use]
    pub fn with_avatar(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }

    /// Validates the draft for task creation.
    ///
    /// Title, description and assignee must be non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::Validation`] naming every empty field, or
    /// [`TaskDomainError::InvalidPriority`] for an unknown priority.
    pub fn validate_for_create(self) -> Result<TaskDetails, TaskDomainError> {
        self.validate(&[TaskField::Title, TaskField::Description, TaskField::Assignee])
    }

    /// Validates the draft for editing an existing task.
    ///
    /// Only the title is required when editing.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::Validation`] for an empty title, or
    /// [`TaskDomainError::InvalidPriority`] for an unknown priority.
    pub fn validate_for_update(self) -> Result<TaskDetails, TaskDomainError> {
        self.validate(&[TaskField::Title])
    }

    fn validate(self, required: &[TaskField]) -> Result<TaskDetails, TaskDomainError> {
        let missing: Vec<TaskField> = required
            .iter()
            .copied()
            .filter(|field| self.value_of(*field).trim().is_empty())
            .collect();
        if !missing.is_empty() {
            return Err(TaskDomainError::Validation {
                missing: MissingFields(missing),
            });
        }

        let priority = TaskPriority::try_from(self.priority.as_str())?;
        let mut assignee = Assignee::new(self.assignee.trim());
        if let Some(avatar_url) = self.avatar_url {
            assignee = assignee.with_avatar(avatar_url);
        }

        Ok(TaskDetails {
            title: self.title.trim().to_owned(),
            description: self.description.trim().to_owned(),
            assignee,
            due_date: self.due_date,
            priority,
        })
    }

    fn value_of(&self, field: TaskField) -> &str {
        match field {
            TaskField::Title => &self.title,
            TaskField::Description => &self.description,
            TaskField::Assignee => &self.assignee,
        }
    }
}

/// Validated editable task details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDetails {
    /// Trimmed title.
    pub title: String,
    /// Trimmed description.
    pub description: String,
    /// Assignee identity.
    pub assignee: Assignee,
    /// Due date; `None` defers to the creation time.
    pub due_date: Option<DateTime<Utc>>,
    /// Parsed priority.
    pub priority: TaskPriority,
}
