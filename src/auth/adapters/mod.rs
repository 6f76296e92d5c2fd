//! Session provider adapters.

pub mod memory;
