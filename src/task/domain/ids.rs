//! Identifier types for the task domain.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a task, stable for the task's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Prefix used when a task id is rendered as a board element id.
    pub const ELEMENT_PREFIX: &'static str = "task-";

    /// Creates a new random task identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a task identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }

    /// Returns the element id used for this task's card on the board.
    #[must_use]
    pub fn element_id(self) -> String {
        format!("{}{}", Self::ELEMENT_PREFIX, self.0)
    }

    /// Parses a `task-<uuid>` board element id.
    ///
    /// Returns `None` when the prefix is missing or the UUID is malformed.
    #[must_use]
    pub fn from_element_id(raw: &str) -> Option<Self> {
        raw.strip_prefix(Self::ELEMENT_PREFIX)
            .and_then(|rest| Uuid::parse_str(rest).ok())
            .map(Self)
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for TaskId {
    type Err = uuid::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(value.trim()).map(Self)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
