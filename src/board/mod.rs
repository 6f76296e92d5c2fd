//! The kanban board.
//!
//! [`domain`] holds the task/column store and the per-session workspace that
//! ties task mutations to project status derivation. [`gesture`] turns
//! pointer telemetry into move commands, [`services`] persists mutations
//! through the task and project ports, and [`view`] projects everything into
//! renderable columns and cards.

pub mod domain;
pub mod gesture;
pub mod services;
pub mod view;

#[cfg(test)]
mod tests;
