//! Projects and their derived status.
//!
//! A project groups tasks. Its status is derived from the statuses of its
//! tasks by [`domain::derive_status`] unless the user explicitly completes
//! it. The module follows the same hexagonal layout as [`crate::task`]:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
