//! Unit tests for the board bounded context.

mod fixtures;
mod service_tests;
