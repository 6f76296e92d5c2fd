//! Taskboard: a kanban board for personal projects.
//!
//! Tasks live in three fixed columns (not started, in progress, done) and
//! are moved between them by dragging. Each project's status is derived from
//! its tasks' statuses after every change that can affect it.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board, task and project logic with no I/O
//! - **Ports**: Async traits for the persistence API and sign-in
//! - **Adapters**: REST and in-memory implementations of the ports
//!
//! # Modules
//!
//! - [`board`]: Task/column store, drag gestures and board rendering
//! - [`project`]: Projects and status derivation
//! - [`task`]: Task records, drafts and validation
//! - [`persistence`]: Shared REST transport and API errors
//! - [`auth`]: Session port and adapters
//! - [`config`]: Environment configuration
//! - [`telemetry`]: Tracing subscriber setup

pub mod auth;
pub mod board;
pub mod config;
pub mod persistence;
pub mod project;
pub mod task;
pub mod telemetry;
