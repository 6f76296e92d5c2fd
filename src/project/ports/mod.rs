//! Port contracts for project persistence.

pub mod api;

pub use api::{NewProjectRecord, ProjectApi, ProjectChanges};
