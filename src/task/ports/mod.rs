//! Port contracts for task persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by the board service.

pub mod api;

pub use api::{NewTaskRecord, TaskApi, TaskChanges};
