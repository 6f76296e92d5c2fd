//! In-memory project persistence adapter.

mod api;

pub use api::InMemoryProjectApi;
