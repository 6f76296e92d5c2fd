//! Domain model for projects.

mod error;
mod ids;
mod project;
mod registry;
mod status;

pub use error::{ParseProjectStatusError, ProjectDomainError};
pub use ids::ProjectId;
pub use project::{PersistedProjectData, Project};
pub use registry::ProjectRegistry;
pub use status::{ProjectStatus, derive_status};
