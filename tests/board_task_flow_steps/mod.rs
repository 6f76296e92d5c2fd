//! Step definitions for board task flow scenarios.

pub mod world;

mod given;
mod then;
mod when;
