//! Session port for the external authentication provider.
//!
//! The board never authenticates users itself. It consumes a resolved
//! [`domain::AuthenticatedUser`] through [`ports::SessionProvider`] to scope
//! persistence queries and to sign requests with a bearer token.

pub mod adapters;
pub mod domain;
pub mod ports;
