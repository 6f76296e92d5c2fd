//! The signed-in user's loaded projects and the current selection.

use super::{Project, ProjectDomainError, ProjectId};

/// Ordered set of loaded projects plus the selected project id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectRegistry {
    projects: Vec<Project>,
    selected: Option<ProjectId>,
}

impl ProjectRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces every loaded project, keeping the selection only if the
    /// selected project is still present.
    pub fn replace_all(&mut self, projects: Vec<Project>) {
        self.projects = projects;
        if let Some(selected) = self.selected
            && self.get(selected).is_none()
        {
            self.selected = None;
        }
    }

    /// Inserts a project, or replaces the loaded project with the same id in
    /// place.
    pub fn upsert(&mut self, project: Project) {
        match self.get_mut(project.id()) {
            Some(existing) => *existing = project,
            None => self.projects.push(project),
        }
    }

    /// Removes a project, clearing the selection if it was selected.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::NotFound`] for an unknown id.
    pub fn remove(&mut self, id: ProjectId) -> Result<Project, ProjectDomainError> {
        let position = self
            .projects
            .iter()
            .position(|project| project.id() == id)
            .ok_or(ProjectDomainError::NotFound(id))?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        Ok(self.projects.remove(position))
    }

    /// Selects a loaded project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::NotFound`] for an unknown id.
    pub fn select(&mut self, id: ProjectId) -> Result<(), ProjectDomainError> {
        if self.get(id).is_none() {
            return Err(ProjectDomainError::NotFound(id));
        }
        self.selected = Some(id);
        Ok(())
    }

    /// Returns the selected project id.
    #[must_use]
    pub const fn selected_id(&self) -> Option<ProjectId> {
        self.selected
    }

    /// Returns the selected project.
    #[must_use]
    pub fn selected(&self) -> Option<&Project> {
        self.selected.and_then(|id| self.get(id))
    }

    /// Looks up a project by id.
    #[must_use]
    pub fn get(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id() == id)
    }

    /// Looks up a project by id for mutation.
    pub fn get_mut(&mut self, id: ProjectId) -> Option<&mut Project> {
        self.projects.iter_mut().find(|project| project.id() == id)
    }

    /// Iterates over loaded projects in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter()
    }

    /// Returns the number of loaded projects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Returns whether no project is loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
