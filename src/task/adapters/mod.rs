//! Adapter implementations of the task API port.

pub mod http;
pub mod memory;
