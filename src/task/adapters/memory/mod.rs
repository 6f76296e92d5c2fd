//! In-memory adapter for tests and offline tooling.

mod api;

pub use api::InMemoryTaskApi;
