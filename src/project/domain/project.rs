//! Project aggregate root.

use super::{ProjectDomainError, ProjectId, ProjectStatus};
use crate::auth::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Project aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    owner: UserId,
    name: String,
    description: String,
    status: ProjectStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedProjectData {
    /// Persisted project identifier.
    pub id: ProjectId,
    /// Owning user.
    pub owner: UserId,
    /// Persisted name.
    pub name: String,
    /// Persisted description.
    pub description: String,
    /// Persisted status.
    pub status: ProjectStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Creates a new not-started project owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyName`] when the name is blank.
    pub fn new(
        owner: UserId,
        name: &str,
        description: &str,
        clock: &impl Clock,
    ) -> Result<Self, ProjectDomainError> {
        let timestamp = clock.utc();
        Ok(Self {
            id: ProjectId::new(),
            owner,
            name: validate_name(name)?,
            description: description.trim().to_owned(),
            status: ProjectStatus::NotStarted,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a project from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedProjectData) -> Self {
        Self {
            id: data.id,
            owner: data.owner,
            name: data.name,
            description: data.description,
            status: data.status,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn owner(&self) -> UserId {
        self.owner
    }

    /// Returns the name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Updates name and/or description.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::EmptyName`] when a blank name is given.
    pub fn update(
        &mut self,
        name: Option<&str>,
        description: Option<&str>,
        clock: &impl Clock,
    ) -> Result<(), ProjectDomainError> {
        let validated_name = name.map(validate_name).transpose()?;
        if let Some(new_name) = validated_name {
            self.name = new_name;
        }
        if let Some(new_description) = description {
            self.description = new_description.trim().to_owned();
        }
        self.touch(clock);
        Ok(())
    }

    /// Force-sets the status to `Done`, bypassing derivation.
    pub fn complete(&mut self, clock: &impl Clock) {
        self.status = ProjectStatus::Done;
        self.touch(clock);
    }

    /// Applies a status computed by [`super::derive_status`].
    ///
    /// Returns whether the status changed. The timestamp is refreshed only
    /// on change.
    pub fn apply_derived_status(&mut self, status: ProjectStatus, clock: &impl Clock) -> bool {
        if self.status == status {
            return false;
        }
        self.status = status;
        self.touch(clock);
        true
    }

    /// Puts back a status captured before a rejected change.
    pub(crate) const fn restore_status(
        &mut self,
        status: ProjectStatus,
        updated_at: DateTime<Utc>,
    ) {
        self.status = status;
        self.updated_at = updated_at;
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

fn validate_name(name: &str) -> Result<String, ProjectDomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ProjectDomainError::EmptyName);
    }
    Ok(trimmed.to_owned())
}
