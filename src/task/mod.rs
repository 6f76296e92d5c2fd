//! Tasks shown on the board.
//!
//! A task belongs to exactly one project and carries a status that mirrors
//! the board column it sits in. Form input arrives as a [`domain::TaskDraft`]
//! and is validated into [`domain::TaskDetails`] before it reaches
//! persistence. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
