//! Shared plumbing for the persistence REST API.
//!
//! The task and project ports both report failures through [`ApiError`], and
//! their HTTP adapters share one authenticated [`ApiTransport`].

mod error;
mod http;

pub use error::{ApiError, ApiResult};
pub use http::ApiTransport;
