//! Project status and its derivation from task statuses.

use super::ParseProjectStatusError;
use crate::task::domain::TaskStatus;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Aggregate project status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// No task has started.
    NotStarted,
    /// Some work is underway or partially finished.
    InProgress,
    /// Every task is done, or the project was completed explicitly.
    Done,
}

impl ProjectStatus {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Done => "done",
        }
    }

    /// Returns the human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Not started",
            Self::InProgress => "In progress",
            Self::Done => "Done",
        }
    }

    /// Returns the badge colour shown next to the project.
    #[must_use]
    pub const fn badge_color(self) -> &'static str {
        match self {
            Self::NotStarted => "gray",
            Self::InProgress => "blue",
            Self::Done => "green",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ProjectStatus {
    type Error = ParseProjectStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "not_started" => Ok(Self::NotStarted),
            "in_progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(ParseProjectStatusError(value.to_owned())),
        }
    }
}

/// Derives a project's status from the statuses of its tasks.
///
/// - no tasks, or all not started: `NotStarted`
/// - all done: `Done`
/// - anything else (some in progress, or a mix of not started and done):
///   `InProgress`
#[must_use]
pub fn derive_status(statuses: impl IntoIterator<Item = TaskStatus>) -> ProjectStatus {
    let mut seen_any = false;
    let mut all_done = true;
    let mut all_not_started = true;
    for status in statuses {
        seen_any = true;
        all_done &= status == TaskStatus::Done;
        all_not_started &= status == TaskStatus::NotStarted;
    }

    match (seen_any, all_done, all_not_started) {
        (false, _, _) | (true, _, true) => ProjectStatus::NotStarted,
        (true, true, false) => ProjectStatus::Done,
        (true, false, false) => ProjectStatus::InProgress,
    }
}
