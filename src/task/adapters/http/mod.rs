//! REST adapter for task persistence.

mod api;
mod models;

pub use api::HttpTaskApi;
