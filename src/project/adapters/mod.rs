//! Adapter implementations for project persistence.

pub mod http;
pub mod memory;
