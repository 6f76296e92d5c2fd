//! Port contract for the authentication collaborator.

use super::domain::{AuthenticatedUser, Credentials};
use async_trait::async_trait;
use thiserror::Error;

/// Result type for session operations.
pub type AuthResult<T> = Result<T, AuthError>;

/// Session provider contract.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Signs in an existing account and makes it the current session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] when the email or password
    /// does not match.
    async fn sign_in(&self, credentials: &Credentials) -> AuthResult<AuthenticatedUser>;

    /// Registers an account and makes it the current session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::EmailTaken`] when the email is already registered.
    async fn sign_up(&self, credentials: &Credentials) -> AuthResult<AuthenticatedUser>;

    /// Ends the current session. Signing out without a session succeeds.
    async fn sign_out(&self) -> AuthResult<()>;

    /// Returns the current session, or `None` when signed out or expired.
    async fn current_user(&self) -> AuthResult<Option<AuthenticatedUser>>;
}

/// Errors returned by session providers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Email or password did not match.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Sign-up used an email that already has an account.
    #[error("email already registered: {0}")]
    EmailTaken(String),

    /// Provider-side failure.
    #[error("authentication provider error: {0}")]
    Provider(String),
}
