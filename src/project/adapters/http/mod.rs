//! REST adapter for project persistence.

mod api;
mod models;

pub use api::HttpProjectApi;
